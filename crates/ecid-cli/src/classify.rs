//! # Classify Subcommand
//!
//! Prints the taxpayer type of a RUC. Exits 1 when the type is unknown,
//! which includes every invalid RUC.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use ecid_core::{check_tax_id, classify_taxpayer_type, RegistrantClass, TaxpayerType};

use crate::OutputFormat;

/// Arguments for the `ecid classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// RUC to classify (13 digits, no separators).
    #[arg(value_name = "RUC")]
    pub value: String,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    input: &'a str,
    taxpayer_type: TaxpayerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    registrant_class: Option<RegistrantClass>,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, output: OutputFormat) -> Result<u8> {
    let taxpayer_type = classify_taxpayer_type(&args.value);
    let registrant_class = match check_tax_id(&args.value) {
        Ok(class) => Some(class),
        Err(e) => {
            tracing::info!(input = %args.value, "not a valid RUC: {e}");
            None
        }
    };

    print!(
        "{}",
        render_classify(&args.value, taxpayer_type, registrant_class, output)?
    );
    Ok(if taxpayer_type == TaxpayerType::Unknown { 1 } else { 0 })
}

/// Render a classification: the taxpayer type alone as text, or a JSON
/// document that also carries the registrant class of a valid RUC.
pub fn render_classify(
    input: &str,
    taxpayer_type: TaxpayerType,
    registrant_class: Option<RegistrantClass>,
    output: OutputFormat,
) -> Result<String> {
    let line = match output {
        OutputFormat::Text => taxpayer_type.to_string(),
        OutputFormat::Json => serde_json::to_string(&ClassifyOutput {
            input,
            taxpayer_type,
            registrant_class,
        })?,
    };
    Ok(line + "\n")
}
