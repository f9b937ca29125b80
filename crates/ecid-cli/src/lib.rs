//! # ecid-cli — Identifier Toolkit Command Line
//!
//! Provides the `ecid` binary over `ecid-core`.
//!
//! ## Subcommands
//!
//! - `ecid validate` — Validate cédulas and RUCs from arguments or a file.
//! - `ecid format` — Render an identifier in its grouped layout.
//! - `ecid classify` — Report the taxpayer type of a RUC.
//! - `ecid check-digit` — Compute the check digit of a nine-digit cédula body.
//!
//! ```bash
//! ecid validate 1710034065 1768000690001
//! ecid validate --file registrations.txt --strict --output json
//! ecid format 1710034065001 --kind ruc
//! ```
//!
//! Handlers return an exit code and write results to stdout. Logging goes to
//! stderr.

pub mod check_digit;
pub mod classify;
pub mod format;
pub mod validate;

use clap::ValueEnum;
use ecid_core::IdentifierKind;

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// JSON documents.
    Json,
}

/// Identifier kind as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// 10-digit national identity number.
    #[value(alias = "national-id", alias = "national_id")]
    Cedula,
    /// 13-digit taxpayer registry number.
    #[value(alias = "tax-id", alias = "tax_id")]
    Ruc,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Cedula => IdentifierKind::NationalId,
            KindArg::Ruc => IdentifierKind::TaxId,
        }
    }
}
