//! srgb-lut: sRGB ⇄ linear light conversion through lookup tables
//!
//! Gamma-encoded sRGB values have to be decoded to linear light before any
//! arithmetic on them (blending, filtering, error diffusion) is physically
//! meaningful, and encoded again for display or storage. The exact transfer
//! functions need a `powf` per component; this crate evaluates them once per
//! 8-bit level into two 256-entry tables and answers every later conversion
//! with a lookup.
//!
//! # Quick Start
//!
//! ```
//! use srgb_lut::{to_linear, to_srgb, ColorSample};
//!
//! let pixel = ColorSample::from_rgba8(128, 64, 200, 255);
//!
//! let linear = to_linear(pixel);
//! // ... math in linear light ...
//! let back = to_srgb(linear);
//!
//! assert_eq!(back.a, pixel.a);
//! ```
//!
//! # Tables
//!
//! | Table | Curve | Entry `i` |
//! |-------|-------|-----------|
//! | [`LinearizationTable`] | sRGB → linear | `srgb_to_linear(i / 255)` |
//! | [`DelinearizationTable`] | linear → sRGB | `linear_to_srgb(i / 255)` |
//!
//! Both are built on first use, exactly once per process, and read without
//! locking afterwards. [`warm_up`] builds them up front.
//!
//! # Indexing
//!
//! A component `c` selects entry `round(clamp(c, 0, 1) * 255)`, rounding
//! halves away from zero ([`table_index`]). Both directions use the same
//! rule. Because the delinearization table is indexed by linear value,
//! dark tones are quantized coarsely: a decode/encode round trip is within
//! 2 levels for most inputs but can drift further near black.
//!
//! # Input domain
//!
//! [`to_linear`] and [`to_srgb`] expect RGB in 0.0..=1.0. Debug builds
//! assert it; release builds clamp. [`try_to_linear`] and [`try_to_srgb`]
//! return [`ConvertError::OutOfDomain`] instead.

pub mod cache;
pub mod convert;
pub mod error;
pub mod sample;
pub mod table;
pub mod transfer;


pub use cache::{
    delinearization_state, delinearization_table, linearization_state, linearization_table,
    warm_up, TableState,
};
pub use convert::{to_linear, to_srgb, try_to_linear, try_to_srgb};
pub use error::{Channel, ConvertError, ParseColorError};
pub use sample::ColorSample;
pub use table::{
    build_delinearization_table, build_linearization_table, table_index, DelinearizationTable,
    Delinearize, LinearizationTable, Linearize, TransferCurve, TransferTable, TABLE_SIZE,
};
pub use transfer::{linear_to_srgb, srgb_to_linear};
