use serde::Serialize;
use srgb_lut::ColorSample;

use super::converter::{Direction, TableKind};
use crate::error::CliError;
use crate::models::{AppConfig, OutputFormat};

#[derive(Debug, Serialize)]
struct SampleReport {
    direction: Direction,
    input: [f32; 4],
    output: [f32; 4],
}

#[derive(Debug, Serialize)]
struct TableReport<'a> {
    table: TableKind,
    values: &'a [f32],
}

fn components(sample: ColorSample) -> [f32; 4] {
    [sample.r, sample.g, sample.b, sample.a]
}

/// Format one conversion result.
///
/// Text output is the four output components separated by spaces.
pub fn render_sample(
    direction: Direction,
    input: ColorSample,
    output: ColorSample,
    config: &AppConfig,
) -> Result<String, CliError> {
    match config.format {
        OutputFormat::Text => Ok(components(output)
            .iter()
            .map(|c| format!("{c:.prec$}", prec = config.precision))
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SampleReport {
            direction,
            input: components(input),
            output: components(output),
        })?),
    }
}

/// Format a table dump.
///
/// Text output has one `index value` line per entry.
pub fn render_table(
    table: TableKind,
    values: &[f32],
    config: &AppConfig,
) -> Result<String, CliError> {
    match config.format {
        OutputFormat::Text => Ok(values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{index} {value:.prec$}", prec = config.precision))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&TableReport { table, values })?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(format: OutputFormat, precision: usize) -> AppConfig {
        AppConfig {
            format,
            precision,
            strict: false,
        }
    }

    #[test]
    fn test_text_sample() {
        let out = ColorSample::new(1.0, 0.5, 0.0, 0.25);
        let text = render_sample(Direction::ToSrgb, out, out, &config(OutputFormat::Text, 3))
            .unwrap();
        assert_eq!(text, "1.000 0.500 0.000 0.250");
    }

    #[test]
    fn test_json_sample() {
        let input = ColorSample::new(1.0, 0.0, 0.0, 1.0);
        let output = ColorSample::new(1.0, 0.0, 0.0, 1.0);
        let json = render_sample(
            Direction::ToLinear,
            input,
            output,
            &config(OutputFormat::Json, 6),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["direction"], "to-linear");
        assert_eq!(value["input"][0], 1.0);
        assert_eq!(value["output"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_text_table() {
        let text = render_table(
            TableKind::Linearization,
            &[0.0, 0.5, 1.0],
            &config(OutputFormat::Text, 2),
        )
        .unwrap();
        assert_eq!(text, "0 0.00\n1 0.50\n2 1.00");
    }

    #[test]
    fn test_json_table() {
        let json = render_table(
            TableKind::Delinearization,
            &[0.0, 1.0],
            &config(OutputFormat::Json, 6),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["table"], "delinearization");
        assert_eq!(value["values"][1], 1.0);
    }
}
