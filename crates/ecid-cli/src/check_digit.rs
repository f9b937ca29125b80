//! # Check-Digit Subcommand
//!
//! Computes the tenth digit of a cédula from its first nine, and prints the
//! completed number.

use anyhow::Result;
use clap::Args;

use ecid_core::{format_identifier, national_id_check_digit, IdentifierKind};

use crate::OutputFormat;

/// Arguments for the `ecid check-digit` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// The first nine digits of a cédula.
    #[arg(value_name = "BODY")]
    pub body: String,
}

/// Execute the check-digit subcommand.
///
/// Exits 1 when BODY is not exactly nine digits.
pub fn run_check_digit(args: &CheckDigitArgs, output: OutputFormat) -> Result<u8> {
    let Some(rendered) = render_check_digit(&args.body, output) else {
        tracing::error!(body = %args.body, "expected exactly nine digits");
        return Ok(1);
    };
    print!("{rendered}");
    Ok(0)
}

/// Render the check digit of `body` and the completed cédula.
///
/// Text output is `D (DD-DDDDDDD-D)`. Returns `None` when `body` is not
/// exactly nine ASCII digits.
pub fn render_check_digit(body: &str, output: OutputFormat) -> Option<String> {
    let digit = national_id_check_digit(body)?;
    let complete = format!("{body}{digit}");
    let line = match output {
        OutputFormat::Text => format!(
            "{digit} ({})",
            format_identifier(&complete, IdentifierKind::NationalId)
        ),
        OutputFormat::Json => serde_json::json!({
            "body": body,
            "check_digit": digit,
            "national_id": complete,
        })
        .to_string(),
    };
    Some(line + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_shows_digit_and_grouped_cedula() {
        assert_eq!(
            render_check_digit("171003406", OutputFormat::Text).as_deref(),
            Some("5 (17-1003406-5)\n")
        );
        assert_eq!(
            render_check_digit("000000000", OutputFormat::Text).as_deref(),
            Some("0 (00-0000000-0)\n")
        );
    }

    #[test]
    fn json_document() {
        assert_eq!(
            render_check_digit("171003406", OutputFormat::Json).as_deref(),
            Some("{\"body\":\"171003406\",\"check_digit\":5,\"national_id\":\"1710034065\"}\n")
        );
    }

    #[test]
    fn nine_digit_body() {
        let args = CheckDigitArgs {
            body: "171003406".to_string(),
        };
        assert_eq!(run_check_digit(&args, OutputFormat::Text).unwrap(), 0);
    }

    #[test]
    fn rejects_short_body() {
        assert_eq!(render_check_digit("1710", OutputFormat::Text), None);
        let args = CheckDigitArgs {
            body: "1710".to_string(),
        };
        assert_eq!(run_check_digit(&args, OutputFormat::Json).unwrap(), 1);
    }
}
