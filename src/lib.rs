//! srgb-convert
//!
//! Command-line front end for the `srgb-lut` conversion tables.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
