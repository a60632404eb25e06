//! sRGB transfer functions (IEC 61966-2-1)
//!
//! Exact piecewise formulas, evaluated in `f64`. The lookup tables in
//! [`crate::table`] are derived from these; nothing on the per-pixel path
//! calls them directly.

/// Upper bound of the linear segment of the decoding curve (sRGB side).
pub const SRGB_THRESHOLD: f64 = 0.04045;

/// Upper bound of the linear segment of the encoding curve (linear side).
pub const LINEAR_THRESHOLD: f64 = 0.003_130_8;

/// Slope of the linear segment near black.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

const OFFSET: f64 = 0.055;

/// sRGB (gamma-encoded) signal to linear light.
#[inline]
pub fn srgb_to_linear(signal: f64) -> f64 {
    if signal <= SRGB_THRESHOLD {
        signal / LINEAR_SLOPE
    } else {
        ((signal + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// Linear light to sRGB (gamma-encoded) signal.
#[inline]
pub fn linear_to_srgb(signal: f64) -> f64 {
    if signal <= LINEAR_THRESHOLD {
        signal * LINEAR_SLOPE
    } else {
        (1.0 + OFFSET) * signal.powf(1.0 / GAMMA) - OFFSET
    }
}
