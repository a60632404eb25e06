use std::path::PathBuf;

use srgb_lut::{ConvertError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Invalid hex color: {0}")]
    Hex(#[from] ParseColorError),

    #[error("Out of domain: {0}")]
    Domain(#[from] ConvertError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
