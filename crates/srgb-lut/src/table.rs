//! Transfer tables
//!
//! A [`TransferTable`] holds one transfer curve sampled at the 256 levels of
//! an 8-bit component. Which curve it holds is part of its type, so a
//! linearization table cannot be handed to code expecting the inverse.

use std::fmt;
use std::marker::PhantomData;

use crate::transfer;

/// Number of entries in every transfer table.
pub const TABLE_SIZE: usize = 256;

/// Largest table index, also the scale factor from [0, 1] to an index.
pub const MAX_INDEX: f32 = (TABLE_SIZE - 1) as f32;

mod sealed {
    pub trait Sealed {}
}

/// A transfer curve that can be tabulated.
///
/// Implemented only by [`Linearize`] and [`Delinearize`].
pub trait TransferCurve: sealed::Sealed {
    /// Human-readable table name, used in logs and diagnostics.
    const NAME: &'static str;

    /// Evaluate the curve for a signal in 0.0..=1.0.
    fn apply(signal: f64) -> f64;
}

/// sRGB to linear (decoding) curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linearize {}

/// Linear to sRGB (encoding) curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delinearize {}

impl sealed::Sealed for Linearize {}
impl sealed::Sealed for Delinearize {}

impl TransferCurve for Linearize {
    const NAME: &'static str = "linearization";

    #[inline]
    fn apply(signal: f64) -> f64 {
        transfer::srgb_to_linear(signal)
    }
}

impl TransferCurve for Delinearize {
    const NAME: &'static str = "delinearization";

    #[inline]
    fn apply(signal: f64) -> f64 {
        transfer::linear_to_srgb(signal)
    }
}

/// 256 samples of a transfer curve; entry `i` is the curve at `i / 255`.
pub struct TransferTable<C> {
    values: [f32; TABLE_SIZE],
    curve: PhantomData<C>,
}

/// Table mapping sRGB levels to linear light.
pub type LinearizationTable = TransferTable<Linearize>;

/// Table mapping linear light levels to sRGB.
pub type DelinearizationTable = TransferTable<Delinearize>;

impl<C: TransferCurve> TransferTable<C> {
    /// Evaluate the curve once per index, in index order.
    pub fn build() -> Self {
        let mut values = [0.0f32; TABLE_SIZE];
        for (index, value) in values.iter_mut().enumerate() {
            let signal = index as f64 / f64::from(MAX_INDEX);
            *value = C::apply(signal) as f32;
        }

        tracing::debug!(table = C::NAME, entries = TABLE_SIZE, "built transfer table");

        Self {
            values,
            curve: PhantomData,
        }
    }

    /// Name of the curve this table samples.
    #[inline]
    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Table entry for an 8-bit level. Every `u8` is a valid index.
    #[inline]
    pub fn get(&self, index: u8) -> f32 {
        self.values[usize::from(index)]
    }

    /// Look up a normalized component using [`table_index`].
    #[inline]
    pub fn lookup(&self, component: f32) -> f32 {
        self.get(table_index(component))
    }

    /// All entries in index order.
    #[inline]
    pub fn values(&self) -> &[f32; TABLE_SIZE] {
        &self.values
    }
}

impl<C> Clone for TransferTable<C> {
    fn clone(&self) -> Self {
        Self {
            values: self.values,
            curve: PhantomData,
        }
    }
}

impl<C> PartialEq for TransferTable<C> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<C: TransferCurve> fmt::Debug for TransferTable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferTable")
            .field("curve", &C::NAME)
            .field("first", &self.values[0])
            .field("last", &self.values[TABLE_SIZE - 1])
            .finish()
    }
}

/// Build the sRGB to linear table.
pub fn build_linearization_table() -> LinearizationTable {
    TransferTable::build()
}

/// Build the linear to sRGB table.
pub fn build_delinearization_table() -> DelinearizationTable {
    TransferTable::build()
}

/// Map a normalized component to a table index.
///
/// The component is clamped to 0.0..=1.0, scaled by 255 and rounded to the
/// nearest integer, halves away from zero. NaN maps to 0. Every lookup in
/// this crate goes through this function.
#[inline]
pub fn table_index(component: f32) -> u8 {
    // `as` saturates and sends NaN to 0
    (component.clamp(0.0, 1.0) * MAX_INDEX).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_endpoints() {
        let linearize = build_linearization_table();
        assert!(linearize.get(0).abs() < 1e-6);
        assert!((linearize.get(255) - 1.0).abs() < 1e-6);

        let delinearize = build_delinearization_table();
        assert!(delinearize.get(0).abs() < 1e-6);
        assert!((delinearize.get(255) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tables_are_monotonic() {
        let linearize = build_linearization_table();
        let delinearize = build_delinearization_table();

        for window in linearize.values().windows(2) {
            assert!(window[0] <= window[1], "linearization not monotonic: {window:?}");
        }
        for window in delinearize.values().windows(2) {
            assert!(window[0] <= window[1], "delinearization not monotonic: {window:?}");
        }
    }

    #[test]
    fn test_table_entries_match_formula() {
        let linearize = build_linearization_table();
        let delinearize = build_delinearization_table();

        for index in 0..=255u8 {
            let signal = f64::from(index) / 255.0;
            assert_eq!(
                linearize.get(index),
                transfer::srgb_to_linear(signal) as f32,
                "linearization entry {index}"
            );
            assert_eq!(
                delinearize.get(index),
                transfer::linear_to_srgb(signal) as f32,
                "delinearization entry {index}"
            );
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_linearization_table(), build_linearization_table());
        assert_eq!(build_delinearization_table(), build_delinearization_table());
    }

    #[test]
    fn test_table_names() {
        assert_eq!(build_linearization_table().name(), "linearization");
        assert_eq!(build_delinearization_table().name(), "delinearization");
    }

    #[test]
    fn test_index_of_every_level_is_exact() {
        for level in 0..=255u8 {
            let component = f32::from(level) / 255.0;
            assert_eq!(table_index(component), level, "level {level} did not map back");
        }
    }

    #[test]
    fn test_index_rounds_half_away_from_zero() {
        // 0.5 / 255 sits exactly between levels 0 and 1
        assert_eq!(table_index(0.5 / 255.0), 1);
        assert_eq!(table_index(0.49 / 255.0), 0);
        assert_eq!(table_index(127.5 / 255.0), 128);
        assert_eq!(table_index(254.4 / 255.0), 254);
    }

    #[test]
    fn test_index_clamps_out_of_range() {
        assert_eq!(table_index(-0.25), 0);
        assert_eq!(table_index(1.75), 255);
        assert_eq!(table_index(f32::INFINITY), 255);
        assert_eq!(table_index(f32::NEG_INFINITY), 0);
        assert_eq!(table_index(f32::NAN), 0);
    }
}
