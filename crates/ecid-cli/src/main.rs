//! # ecid CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ecid_cli::check_digit::{run_check_digit, CheckDigitArgs};
use ecid_cli::classify::{run_classify, ClassifyArgs};
use ecid_cli::format::{run_format, FormatArgs};
use ecid_cli::validate::{run_validate, ValidateArgs};
use ecid_cli::OutputFormat;

/// Ecuadorian identifier toolkit.
///
/// Validates cédulas (10 digits) and RUCs (13 digits), renders them in
/// grouped form, and classifies RUC taxpayers.
#[derive(Parser, Debug)]
#[command(name = "ecid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Result format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Emit log records as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate cédulas and RUCs from arguments or a file.
    Validate(ValidateArgs),

    /// Print an identifier in its grouped layout.
    Format(FormatArgs),

    /// Report the taxpayer type of a RUC.
    Classify(ClassifyArgs),

    /// Compute the check digit for the first nine digits of a cédula.
    CheckDigit(CheckDigitArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v.
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ecid starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, cli.output),
        Commands::Format(args) => run_format(&args, cli.output),
        Commands::Classify(args) => run_classify(&args, cli.output),
        Commands::CheckDigit(args) => run_check_digit(&args, cli.output),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
