//! Error types for sample parsing and checked conversion

use std::fmt;
use std::num::ParseIntError;

/// Color channel of a [`ColorSample`](crate::ColorSample).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Error returned by the checked conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvertError {
    /// A component is NaN, infinite or outside 0.0..=1.0, so it has no
    /// table index.
    OutOfDomain {
        /// Offending channel
        channel: Channel,
        /// Value as supplied by the caller
        value: f32,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::OutOfDomain { channel, value } => {
                write!(f, "{channel} component {value} is outside 0.0..=1.0")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 4, 6 or 8 digits after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3, 4, 6 or 8 digits)")
            }
            ParseColorError::InvalidHex(err) => write!(f, "invalid hex character: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            ParseColorError::InvalidLength => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_out_of_domain_message() {
        let err = ConvertError::OutOfDomain {
            channel: Channel::Green,
            value: 1.5,
        };
        assert_eq!(err.to_string(), "green component 1.5 is outside 0.0..=1.0");
    }

    #[test]
    fn test_parse_error_source() {
        assert!(ParseColorError::InvalidLength.source().is_none());

        let int_err = u8::from_str_radix("zz", 16).unwrap_err();
        let err = ParseColorError::from(int_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid hex character"));
    }
}
