//! # Format Subcommand
//!
//! Prints an identifier in its grouped layout. Values whose digit count does
//! not match the requested kind are printed as bare digits.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ecid_core::{format_identifier, IdentifierKind};

use crate::{KindArg, OutputFormat};

/// Arguments for the `ecid format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Identifier to format. Non-digit characters are ignored.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Layout to apply.
    #[arg(long, value_enum)]
    pub kind: KindArg,
}

#[derive(Debug, Serialize)]
struct FormatOutput<'a> {
    input: &'a str,
    kind: IdentifierKind,
    formatted: String,
}

/// Execute the format subcommand. Always exits 0.
pub fn run_format(args: &FormatArgs, output: OutputFormat) -> Result<u8> {
    let kind = IdentifierKind::from(args.kind);
    tracing::debug!(input = %args.value, %kind, "formatting identifier");
    print!("{}", render_format(&args.value, kind, output)?);
    Ok(0)
}

/// Render `value` in the layout for `kind`, as a bare line or a JSON
/// document.
pub fn render_format(value: &str, kind: IdentifierKind, output: OutputFormat) -> Result<String> {
    let formatted = format_identifier(value, kind);
    let line = match output {
        OutputFormat::Text => formatted,
        OutputFormat::Json => serde_json::to_string(&FormatOutput {
            input: value,
            kind,
            formatted,
        })?,
    };
    Ok(line + "\n")
}
