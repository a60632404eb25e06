pub mod color_arg;
pub mod config;

pub use color_arg::parse_color_arg;
pub use config::{AppConfig, OutputFormat};
