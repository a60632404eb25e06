//! Per-sample conversion through the shared tables
//!
//! Each RGB component is mapped to a table index with
//! [`table_index`](crate::table::table_index) and replaced by the table entry.
//! Alpha is copied through.

use crate::cache::{delinearization_table, linearization_table};
use crate::error::ConvertError;
use crate::sample::ColorSample;
use crate::table::{TransferCurve, TransferTable};

/// Convert an sRGB sample to linear light.
///
/// # Panics (debug only)
/// Debug-asserts that every RGB component is finite and in 0.0..=1.0.
/// Release builds clamp instead. Use [`try_to_linear`] to reject such input.
///
/// # Example
/// ```
/// use srgb_lut::{to_linear, ColorSample};
///
/// let linear = to_linear(ColorSample::new(1.0, 0.0, 0.5, 0.25));
/// assert_eq!(linear.r, 1.0);
/// assert_eq!(linear.a, 0.25);
/// assert!(linear.b < 0.5);
/// ```
#[inline]
pub fn to_linear(sample: ColorSample) -> ColorSample {
    apply(linearization_table(), sample)
}

/// Convert a linear-light sample to sRGB.
///
/// # Panics (debug only)
/// Same contract as [`to_linear`].
#[inline]
pub fn to_srgb(sample: ColorSample) -> ColorSample {
    apply(delinearization_table(), sample)
}

/// [`to_linear`], rejecting components that have no table index.
pub fn try_to_linear(sample: ColorSample) -> Result<ColorSample, ConvertError> {
    check_domain(&sample)?;
    Ok(to_linear(sample))
}

/// [`to_srgb`], rejecting components that have no table index.
pub fn try_to_srgb(sample: ColorSample) -> Result<ColorSample, ConvertError> {
    check_domain(&sample)?;
    Ok(to_srgb(sample))
}

#[inline]
fn apply<C: TransferCurve>(table: &TransferTable<C>, sample: ColorSample) -> ColorSample {
    debug_assert!(
        check_domain(&sample).is_ok(),
        "{} lookup: {sample:?} has a component outside 0.0..=1.0",
        C::NAME
    );

    sample.with_rgb([
        table.lookup(sample.r),
        table.lookup(sample.g),
        table.lookup(sample.b),
    ])
}

fn check_domain(sample: &ColorSample) -> Result<(), ConvertError> {
    for (channel, value) in sample.channels() {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConvertError::OutOfDomain { channel, value });
        }
    }
    Ok(())
}
