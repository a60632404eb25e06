//! Color sample type

use std::str::FromStr;

use crate::error::{Channel, ParseColorError};

/// One RGBA color sample with normalized components.
///
/// `r`, `g` and `b` are expected in 0.0..=1.0. Conversions replace them and
/// copy `a` through untouched. Whether the RGB values are sRGB-encoded or
/// linear is up to the caller; the conversion functions say which they expect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha, never converted
    pub a: f32,
}

impl ColorSample {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a sample from 8-bit values.
    ///
    /// # Example
    /// ```
    /// use srgb_lut::ColorSample;
    /// let white = ColorSample::from_rgba8(255, 255, 255, 255);
    /// assert_eq!(white.r, 1.0);
    /// assert_eq!(white.a, 1.0);
    /// ```
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Create an opaque sample from 8-bit values.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Convert to `[R, G, B, A]` bytes, rounding and clamping each component.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.a * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// The three converted channels, in order, with their names.
    #[inline]
    pub(crate) fn channels(&self) -> [(Channel, f32); 3] {
        [
            (Channel::Red, self.r),
            (Channel::Green, self.g),
            (Channel::Blue, self.b),
        ]
    }

    /// Same alpha, new color channels.
    #[inline]
    pub(crate) fn with_rgb(self, rgb: [f32; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: self.a,
        }
    }
}

impl FromStr for ColorSample {
    type Err = ParseColorError;

    /// Parse a hex color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The hash is optional, digits are case-insensitive and surrounding
    /// whitespace is ignored. Without an alpha digit the sample is opaque.
    ///
    /// ```
    /// use srgb_lut::ColorSample;
    ///
    /// let red: ColorSample = "#F00".parse().unwrap();
    /// assert_eq!(red, ColorSample::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // `from_str_radix` takes a leading sign, so digits are checked up front.
        // A lone non-digit always fails to parse and yields the error.
        if let Some(pos) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            u8::from_str_radix(&s[pos..pos + 1], 16)?;
        }

        // Shorthand digits expand by multiplying by 17 (0xF -> 0xFF)
        let short = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&s[i..i + 2], 16);

        match s.len() {
            3 => Ok(Self::from_rgb8(short(0)?, short(1)?, short(2)?)),
            4 => Ok(Self::from_rgba8(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::from_rgb8(long(0)?, long(2)?, long(4)?)),
            8 => Ok(Self::from_rgba8(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
