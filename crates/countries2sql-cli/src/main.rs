//! countries2sql CLI - Country YAML to SQL statement generator.

use clap::Parser;
use countries2sql::{GenerateError, Generator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "countries2sql")]
#[command(about = "Convert a countries YAML file to SQL insert/update statements")]
#[command(version)]
struct Cli {
    /// Path to the countries YAML document
    #[arg(default_value = "countries.yaml")]
    input_filename: PathBuf,

    /// SQL output file (standard output when omitted)
    output_filename: Option<PathBuf>,

    /// CSV of already persisted countries (iso2,id rows); countries listed
    /// here get an UPDATE against their stored id instead of an INSERT
    #[arg(long, default_value = "existing_countries.csv")]
    reference: PathBuf,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), GenerateError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity);

    let mut generator = Generator::new(cli.input_filename, cli.reference);
    if let Some(output) = cli.output_filename {
        generator = generator.with_output(output);
    }
    generator.run()?;

    Ok(())
}

/// Logging goes to stderr; stdout carries only the generated SQL.
fn setup_logging(verbosity: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
