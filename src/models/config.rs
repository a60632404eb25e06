use serde::Deserialize;
use std::path::Path;

use crate::error::CliError;

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "SRGB_CONVERT_CONFIG";

/// Output settings loaded from a YAML config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Output format for conversions and table dumps
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in text output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Reject out-of-domain components instead of clamping them
    #[serde(default)]
    pub strict: bool,
}

/// Largest accepted precision; more digits than this say nothing about an f32
pub const MAX_PRECISION: usize = 17;

fn default_precision() -> usize {
    6
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Parse a config file. Unlike [`AppConfig::load`], failures are errors.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config.bounded())
    }

    fn bounded(mut self) -> Self {
        if self.precision > MAX_PRECISION {
            tracing::warn!(
                precision = self.precision,
                max = MAX_PRECISION,
                "Precision too large, capping"
            );
            self.precision = MAX_PRECISION;
        }
        self
    }

    /// Resolve the config: an explicit path must load, the environment
    /// fallback only warns, no file at all means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            return Ok(config);
        }

        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Ok(Self::default());
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                tracing::debug!(path = ?path, "Loaded configuration from environment");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        precision: Option<usize>,
        strict: Option<bool>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        if let Some(strict) = strict {
            self.strict = strict;
        }
        self.bounded()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: default_precision(),
            strict: false,
        }
    }
}
