//! # Error Hierarchy
//!
//! Structured error types for identifier handling, built with `thiserror`.
//!
//! [`ValidationError`] is returned by the `check_*` functions and the newtype
//! constructors. Each variant carries the offending input and what was
//! expected, so a form can tell the user which rule the value broke.

use thiserror::Error;

use crate::format::IdentifierKind;

/// Top-level error type for `ecid-core`.
#[derive(Error, Debug)]
pub enum EcidError {
    /// Identifier validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unrecognized identifier kind name.
    #[error("unknown identifier kind: \"{0}\" (expected cedula, national_id, ruc, or tax_id)")]
    UnknownKind(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for Ecuadorian identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not have the number of characters the kind requires.
    #[error("{kind} must be exactly {expected} digits, got {found} characters")]
    WrongLength {
        /// The identifier kind being validated.
        kind: IdentifierKind,
        /// Required length.
        expected: usize,
        /// Observed length in characters.
        found: usize,
    },

    /// The value contains a character other than an ASCII digit.
    #[error("{kind} contains non-digit character {character:?} at position {position}")]
    NonDigit {
        /// The identifier kind being validated.
        kind: IdentifierKind,
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A cédula's first digit is above 2.
    #[error("national ID \"{value}\" starts with {digit} (expected 0, 1, or 2)")]
    LeadingDigitOutOfRange {
        /// The rejected value.
        value: String,
        /// The leading digit found.
        digit: u8,
    },

    /// A cédula's tenth digit does not match the computed check digit.
    #[error("national ID \"{value}\" has check digit {found}, expected {expected}")]
    CheckDigitMismatch {
        /// The rejected value.
        value: String,
        /// Check digit computed from the first nine digits.
        expected: u8,
        /// Check digit present in the value.
        found: u8,
    },

    /// A RUC's third digit selects no known registrant class.
    #[error("tax ID \"{value}\" has third digit {digit} (expected 0-6 or 9)")]
    UnsupportedThirdDigit {
        /// The rejected value.
        value: String,
        /// The third digit found.
        digit: u8,
    },

    /// A RUC does not end with the establishment suffix its class requires.
    #[error("tax ID \"{value}\" must end with establishment suffix \"{expected}\"")]
    EstablishmentSuffix {
        /// The rejected value.
        value: String,
        /// Required trailing digits.
        expected: &'static str,
    },

    /// Under strict policy, a natural-person RUC embeds an invalid cédula.
    #[error("tax ID \"{value}\" embeds an invalid national ID: {source}")]
    EmbeddedNationalId {
        /// The rejected value.
        value: String,
        /// Why the first ten digits failed.
        source: Box<ValidationError>,
    },

    /// A grouped value does not follow the canonical hyphen layout.
    #[error("{kind} \"{value}\" is not in canonical grouped form")]
    Grouping {
        /// The identifier kind being validated.
        kind: IdentifierKind,
        /// The rejected value.
        value: String,
    },
}
