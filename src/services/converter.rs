use serde::Serialize;
use srgb_lut::{ColorSample, TABLE_SIZE};

use crate::error::CliError;

/// Conversion direction of a single sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    ToLinear,
    ToSrgb,
}

/// Which shared table to dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Linearization,
    Delinearization,
}

/// Convert one sample.
///
/// In strict mode out-of-domain components are an error; otherwise they are
/// clamped into 0.0..=1.0 first, with a warning.
pub fn convert_sample(
    direction: Direction,
    sample: ColorSample,
    strict: bool,
) -> Result<ColorSample, CliError> {
    let converted = if strict {
        match direction {
            Direction::ToLinear => srgb_lut::try_to_linear(sample)?,
            Direction::ToSrgb => srgb_lut::try_to_srgb(sample)?,
        }
    } else {
        let clamped = clamp_rgb(sample);
        if clamped != sample {
            tracing::warn!(?sample, "Color components outside 0..=1 were clamped");
        }
        match direction {
            Direction::ToLinear => srgb_lut::to_linear(clamped),
            Direction::ToSrgb => srgb_lut::to_srgb(clamped),
        }
    };

    tracing::debug!(?direction, ?sample, ?converted, "Converted sample");
    Ok(converted)
}

/// Entries of a shared table, in index order
pub fn table_values(kind: TableKind) -> &'static [f32; TABLE_SIZE] {
    match kind {
        TableKind::Linearization => srgb_lut::linearization_table().values(),
        TableKind::Delinearization => srgb_lut::delinearization_table().values(),
    }
}

fn clamp_rgb(sample: ColorSample) -> ColorSample {
    // NaN has no ordering; treat it as black like the index rule does
    let clamp = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    ColorSample::new(clamp(sample.r), clamp(sample.g), clamp(sample.b), sample.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matches_library() {
        let sample = ColorSample::from_rgb8(10, 128, 250);
        assert_eq!(
            convert_sample(Direction::ToLinear, sample, false).unwrap(),
            srgb_lut::to_linear(sample)
        );
        assert_eq!(
            convert_sample(Direction::ToSrgb, sample, true).unwrap(),
            srgb_lut::to_srgb(sample)
        );
    }

    #[test]
    fn test_lenient_mode_clamps() {
        let sample = ColorSample::new(1.5, -0.5, f32::NAN, 0.75);
        let converted = convert_sample(Direction::ToLinear, sample, false).unwrap();
        assert_eq!(converted, ColorSample::new(1.0, 0.0, 0.0, 0.75));
    }

    #[test]
    fn test_strict_mode_rejects() {
        let sample = ColorSample::new(1.5, 0.5, 0.5, 1.0);
        let result = convert_sample(Direction::ToSrgb, sample, true);
        assert!(matches!(result, Err(CliError::Domain(_))));
    }

    #[test]
    fn test_table_values() {
        let values = table_values(TableKind::Linearization);
        assert_eq!(values.len(), 256);
        assert_eq!(values[0], 0.0);
        assert_eq!(values, srgb_lut::linearization_table().values());
        assert_eq!(
            table_values(TableKind::Delinearization),
            srgb_lut::delinearization_table().values()
        );
    }
}
