use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srgb_convert::models::config::MAX_PRECISION;
use srgb_convert::models::{parse_color_arg, AppConfig, OutputFormat};
use srgb_convert::services::{
    convert_sample, render_sample, render_table, table_values, Direction, TableKind,
};

#[derive(Parser)]
#[command(name = "srgb-convert")]
#[command(about = "Convert color samples between sRGB and linear light")]
struct Cli {
    /// YAML config file (defaults to $SRGB_CONVERT_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places in text output
    #[arg(
        long,
        global = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PRECISION as u64)
    )]
    precision: Option<usize>,

    /// Reject components outside 0..=1 instead of clamping them
    #[arg(long, global = true, overrides_with = "no_strict")]
    strict: bool,

    /// Clamp components outside 0..=1 even if the config file sets strict
    #[arg(long, global = true, overrides_with = "strict")]
    no_strict: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// `Some` only when a strict flag was given, so the config file decides otherwise
    fn strict_override(&self) -> Option<bool> {
        match (self.strict, self.no_strict) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an sRGB color to linear light
    ToLinear {
        /// Hex color (e.g. "#8040C8") or comma-separated floats "r,g,b[,a]"
        color: String,
    },
    /// Convert a linear-light color to sRGB
    ToSrgb {
        /// Hex color or comma-separated floats "r,g,b[,a]"
        color: String,
    },
    /// Print all entries of a transfer table
    Table {
        #[arg(value_enum)]
        table: TableKind,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "srgb_convert=warn,srgb_lut=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.format,
        cli.precision,
        cli.strict_override(),
    );

    let output = match cli.command {
        Commands::ToLinear { color } => run_convert_command(Direction::ToLinear, &color, &config)?,
        Commands::ToSrgb { color } => run_convert_command(Direction::ToSrgb, &color, &config)?,
        Commands::Table { table } => render_table(table, table_values(table), &config)?,
    };

    println!("{output}");
    Ok(())
}

fn run_convert_command(
    direction: Direction,
    color: &str,
    config: &AppConfig,
) -> anyhow::Result<String> {
    let input = parse_color_arg(color)?;
    let output = convert_sample(direction, input, config.strict)?;
    Ok(render_sample(direction, input, output, config)?)
}
