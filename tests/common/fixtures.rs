//! Test fixtures: config files and sample colors.

use std::io::Write;
use std::path::PathBuf;

use srgb_lut::ColorSample;
use tempfile::TempDir;

/// A config file in its own temporary directory.
pub struct ConfigFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to `config.yaml` in a fresh temporary directory.
pub fn write_config(content: &str) -> ConfigFixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    let mut file = std::fs::File::create(&path).expect("Failed to create config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config file");
    ConfigFixture { dir, path }
}

/// Grey levels used for round-trip checks
pub const GREY_LEVELS: [u8; 6] = [0, 32, 64, 128, 192, 255];

pub fn grey(level: u8) -> ColorSample {
    ColorSample::from_rgb8(level, level, level)
}
