//! CLI entry point for the data quality inspector.

use anyhow::Result;
use clap::Parser;
use lex_inspector::{Inspector, InspectorConfig, dataset};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Column checked for outliers when running on the built-in sample.
const SAMPLE_OUTLIER_COLUMN: &str = "salary";

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Data quality checks for tabular data",
    long_about = "Prints missing values, duplicate rows and column types for a dataset,\n\
                  then lists IQR outliers for the requested numeric columns.\n\n\
                  Without --input a small built-in sample is inspected.\n\n\
                  EXAMPLES:\n  \
                  # Inspect the built-in sample\n  \
                  lex-inspector\n\n  \
                  # Inspect a CSV file and check two columns for outliers\n  \
                  lex-inspector -i data.csv -c price -c quantity\n\n  \
                  # Only flag extreme values\n  \
                  lex-inspector -i data.json -c price --iqr-multiplier 3"
)]
struct Args {
    /// Path to a CSV or JSON (column-oriented object) dataset
    ///
    /// If not specified, the built-in sample dataset is used
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Numeric column to check for outliers (repeatable)
    ///
    /// Defaults to "salary" for the built-in sample and to none for --input
    #[arg(short = 'c', long = "outliers", value_name = "COLUMN")]
    outlier_columns: Vec<String>,

    /// Width of the outlier fences in multiples of the IQR
    #[arg(long, default_value = "1.5")]
    iqr_multiplier: f64,

    /// Count missing cells as equal when looking for duplicate rows
    #[arg(long, default_value = "false")]
    nulls_equal: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the report.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "error" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = InspectorConfig::builder()
        .iqr_multiplier(args.iqr_multiplier)
        .nulls_equal(args.nulls_equal)
        .build()?;
    debug!("Configuration: {:?}", config);

    let (df, outlier_columns) = match &args.input {
        Some(path) => (dataset::load(path)?, args.outlier_columns.clone()),
        None => {
            info!("No input given, inspecting the built-in sample");
            let columns = if args.outlier_columns.is_empty() {
                vec![SAMPLE_OUTLIER_COLUMN.to_string()]
            } else {
                args.outlier_columns.clone()
            };
            (dataset::sample()?, columns)
        }
    };

    let inspector = Inspector::with_config(df, config);
    inspector.summary()?;

    for column in &outlier_columns {
        inspector.check_outliers(column)?;
    }

    Ok(())
}
