//! # Validate Subcommand
//!
//! Validates identifiers given as arguments and/or one per line in a file
//! (`-` reads stdin). Each input is inspected with `ecid_core::inspect`;
//! blank lines are skipped.
//!
//! Exit codes: 0 when every input is valid, 1 when any input is invalid,
//! 2 when there was nothing to validate.

use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ecid_core::{inspect_batch, BatchSummary, IdentifierKind, IdentifierReport, ValidationPolicy};

use crate::{KindArg, OutputFormat};

/// Arguments for the `ecid validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate.
    #[arg(value_name = "VALUE")]
    pub values: Vec<String>,

    /// Treat every input as this kind instead of inferring it from its length.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Also require natural-person RUCs to embed a valid cédula.
    #[arg(long)]
    pub strict: bool,

    /// Read additional identifiers, one per line, from PATH (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl ValidateArgs {
    fn policy(&self) -> ValidationPolicy {
        if self.strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, output: OutputFormat) -> Result<u8> {
    let mut inputs = args.values.clone();
    if let Some(ref path) = args.file {
        inputs.extend(read_inputs(path)?);
    }

    let kind = args.kind.map(IdentifierKind::from);
    let policy = args.policy();
    tracing::debug!(count = inputs.len(), ?kind, ?policy, "validating identifiers");

    let summary = inspect_batch(&inputs, kind, policy);
    if summary.total == 0 {
        eprintln!("Usage: ecid validate [VALUE]... [--file PATH] [--kind cedula|ruc] [--strict]");
        return Ok(2);
    }

    for report in &summary.reports {
        tracing::debug!(input = %report.input, valid = report.valid, "inspected");
    }
    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        "validation complete"
    );

    match output {
        OutputFormat::Text => print!("{}", render_text(&summary)),
        OutputFormat::Json => println!("{}", summary.to_json_pretty()?),
    }

    Ok(if summary.all_valid() { 0 } else { 1 })
}

/// Read identifiers from `path`, one per line. `-` reads stdin.
pub fn read_inputs(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return collect_lines(std::io::stdin().lock(), "<stdin>");
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    collect_lines(file, &path.display().to_string())
}

fn collect_lines<R: Read>(reader: R, source: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {} of {source}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            tracing::warn!(line = index + 1, %source, "skipping blank line");
            continue;
        }
        lines.push(trimmed.to_string());
    }
    Ok(lines)
}

/// Render one line per report followed by a summary line.
pub fn render_text(summary: &BatchSummary) -> String {
    let mut out = String::new();
    for report in &summary.reports {
        out.push_str(&render_report_line(report));
        out.push('\n');
    }
    out.push_str(&format!(
        "{}/{} valid, {} invalid\n",
        summary.valid, summary.total, summary.invalid
    ));
    out
}

fn render_report_line(report: &IdentifierReport) -> String {
    let kind = report.kind.map_or("unknown", |k| k.as_str());
    if report.valid {
        let mut line = format!("  OK: {} ({kind}) {}", report.input, report.formatted);
        if let Some(class) = report.registrant_class {
            line.push_str(&format!(" [{class}"));
            if let Some(taxpayer) = report.taxpayer_type {
                line.push_str(&format!(", {taxpayer}"));
            }
            line.push(']');
        }
        line
    } else {
        let reason = report.reason.as_deref().unwrap_or("invalid");
        format!("FAIL: {} ({kind}) — {reason}", report.input)
    }
}
