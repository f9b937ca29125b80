//! # Inspection Reports
//!
//! [`inspect`] runs the full pipeline for one user-entered value (separator
//! removal, kind inference, validation, grouping, classification) and
//! returns a serializable [`IdentifierReport`]. [`inspect_batch`] does the
//! same for many values and tallies the outcome.
//!
//! Hyphens, spaces, and dots are treated as separators a person might type.
//! Any other non-digit character is kept so that validation reports it.

use serde::Serialize;

use crate::cedula::check_national_id;
use crate::error::EcidError;
use crate::format::{format_identifier, remove_separators, IdentifierKind};
use crate::ruc::{
    check_tax_id_with, classify_taxpayer_type, RegistrantClass, TaxpayerType, ValidationPolicy,
};

/// Outcome of inspecting a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierReport {
    /// The value as supplied.
    pub input: String,
    /// Requested or inferred kind. `None` when it could not be inferred.
    pub kind: Option<IdentifierKind>,
    /// Whether the value passed validation.
    pub valid: bool,
    /// Grouped form, or the bare digits if the length does not fit `kind`.
    pub formatted: String,
    /// Why validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Registrant class of a valid tax ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_class: Option<RegistrantClass>,
    /// Taxpayer type of a tax ID (`unknown` when invalid).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxpayer_type: Option<TaxpayerType>,
}

impl IdentifierReport {
    /// Serialize the report as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EcidError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EcidError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Tally of a batch inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of non-blank inputs inspected.
    pub total: usize,
    /// Number that passed.
    pub valid: usize,
    /// Number that failed.
    pub invalid: usize,
    /// Per-input reports in input order.
    pub reports: Vec<IdentifierReport>,
}

impl BatchSummary {
    /// `true` when at least one input was inspected and none failed.
    pub fn all_valid(&self) -> bool {
        self.total > 0 && self.invalid == 0
    }

    /// Serialize the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EcidError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, EcidError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Inspect one value.
///
/// When `kind` is `None` it is inferred with [`IdentifierKind::detect`].
pub fn inspect(
    raw: &str,
    kind: Option<IdentifierKind>,
    policy: ValidationPolicy,
) -> IdentifierReport {
    let normalized = remove_separators(raw);

    let Some(kind) = kind.or_else(|| IdentifierKind::detect(raw)) else {
        return IdentifierReport {
            input: raw.to_string(),
            kind: None,
            valid: false,
            formatted: normalized.clone(),
            reason: Some(format!(
                "cannot infer identifier kind from {} characters (expected 10 or 13)",
                normalized.chars().count()
            )),
            registrant_class: None,
            taxpayer_type: None,
        };
    };

    let outcome = match kind {
        IdentifierKind::NationalId => check_national_id(&normalized).map(|()| None),
        IdentifierKind::TaxId => check_tax_id_with(&normalized, policy).map(Some),
    };

    let (valid, reason, registrant_class) = match outcome {
        Ok(class) => (true, None, class),
        Err(err) => (false, Some(err.to_string()), None),
    };

    let taxpayer_type = match kind {
        IdentifierKind::TaxId if valid => Some(classify_taxpayer_type(&normalized)),
        IdentifierKind::TaxId => Some(TaxpayerType::Unknown),
        IdentifierKind::NationalId => None,
    };

    IdentifierReport {
        input: raw.to_string(),
        kind: Some(kind),
        valid,
        formatted: format_identifier(&normalized, kind),
        reason,
        registrant_class,
        taxpayer_type,
    }
}

/// Inspect every non-blank input.
pub fn inspect_batch<I, S>(
    inputs: I,
    kind: Option<IdentifierKind>,
    policy: ValidationPolicy,
) -> BatchSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = BatchSummary::default();
    for input in inputs {
        let input = input.as_ref();
        if input.trim().is_empty() {
            continue;
        }
        let report = inspect(input, kind, policy);
        summary.total += 1;
        if report.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        summary.reports.push(report);
    }
    summary
}
