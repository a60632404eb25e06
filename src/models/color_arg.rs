use srgb_lut::ColorSample;

use crate::error::CliError;

/// Parse a color given on the command line.
///
/// Accepts a hex color (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`) or three
/// to four comma-separated normalized floats `r,g,b[,a]`. Alpha defaults
/// to 1.0. Range checks are left to the conversion step.
pub fn parse_color_arg(input: &str) -> Result<ColorSample, CliError> {
    let trimmed = input.trim();
    if !trimmed.contains(',') {
        return Ok(trimmed.parse::<ColorSample>()?);
    }

    let components = trimmed
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|e| CliError::InvalidColor {
                    input: input.to_string(),
                    reason: format!("'{}': {e}", part.trim()),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components[..] {
        [r, g, b] => Ok(ColorSample::new(r, g, b, 1.0)),
        [r, g, b, a] => Ok(ColorSample::new(r, g, b, a)),
        _ => Err(CliError::InvalidColor {
            input: input.to_string(),
            reason: format!("expected 3 or 4 components, got {}", components.len()),
        }),
    }
}
