//! # Identifier Kinds and Digit Grouping
//!
//! Defines [`IdentifierKind`] and the cosmetic formatter that renders a
//! cleaned identifier in its grouped, human-readable layout:
//!
//! | Kind | Digits | Layout |
//! |------|--------|--------|
//! | National ID (cédula) | 10 | `DD-DDDDDDD-D` |
//! | Tax ID (RUC) | 13 | `DD-DDDDDDD-DDD-D` |
//!
//! Formatting never fails. Input of the wrong length comes back as its bare
//! digits.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EcidError, ValidationError};

/// Number of digits in a cédula.
pub const NATIONAL_ID_LENGTH: usize = 10;

/// Number of digits in a RUC.
pub const TAX_ID_LENGTH: usize = 13;

/// The two identifier kinds handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Cédula de identidad (10 digits).
    NationalId,
    /// Registro Único de Contribuyentes (13 digits).
    TaxId,
}

impl IdentifierKind {
    /// Returns both kinds.
    pub fn all() -> &'static [IdentifierKind] {
        &[Self::NationalId, Self::TaxId]
    }

    /// The snake_case name used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::TaxId => "tax_id",
        }
    }

    /// Required digit count.
    pub fn expected_length(&self) -> usize {
        match self {
            Self::NationalId => NATIONAL_ID_LENGTH,
            Self::TaxId => TAX_ID_LENGTH,
        }
    }

    /// Infer the kind from the length of `raw` once surrounding whitespace
    /// and separators (hyphen, space, dot) are removed: 10 characters is a
    /// national ID, 13 a tax ID.
    ///
    /// Other characters still count, so `"17100340a5"` is detected as a
    /// national ID and then fails validation on the letter.
    pub fn detect(raw: &str) -> Option<Self> {
        let count = remove_separators(raw).chars().count();
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.expected_length() == count)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NationalId => f.write_str("national ID"),
            Self::TaxId => f.write_str("tax ID"),
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = EcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "national_id" | "national-id" | "cedula" | "cédula" => Ok(Self::NationalId),
            "tax_id" | "tax-id" | "ruc" => Ok(Self::TaxId),
            _ => Err(EcidError::UnknownKind(s.to_string())),
        }
    }
}

/// Trim `raw` and drop the separators a person might type between digit
/// groups.
pub(crate) fn remove_separators(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | ' ' | '.'))
        .collect()
}

/// Remove every character that is not an ASCII digit.
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Render `raw` in the grouped layout for `kind`.
///
/// Non-digit characters are stripped first. If the remaining digit count
/// does not match `kind`, the bare digits are returned unchanged.
pub fn format_identifier(raw: &str, kind: IdentifierKind) -> String {
    let digits = strip_non_digits(raw);
    match (kind, digits.len()) {
        (IdentifierKind::NationalId, NATIONAL_ID_LENGTH) => {
            format!("{}-{}-{}", &digits[..2], &digits[2..9], &digits[9..])
        }
        (IdentifierKind::TaxId, TAX_ID_LENGTH) => format!(
            "{}-{}-{}-{}",
            &digits[..2],
            &digits[2..9],
            &digits[9..12],
            &digits[12..]
        ),
        _ => digits,
    }
}

/// Split `value` into its decimal digits, enforcing the length of `kind`.
///
/// Length is counted in characters, so multi-byte input reports the count a
/// user would see.
pub(crate) fn parse_digits(value: &str, kind: IdentifierKind) -> Result<Vec<u8>, ValidationError> {
    let expected = kind.expected_length();
    let found = value.chars().count();
    if found != expected {
        return Err(ValidationError::WrongLength {
            kind,
            expected,
            found,
        });
    }

    value
        .chars()
        .enumerate()
        .map(|(position, character)| {
            character
                .to_digit(10)
                .map(|d| d as u8)
                .ok_or(ValidationError::NonDigit {
                    kind,
                    position,
                    character,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_national_id() {
        assert_eq!(
            format_identifier("1710034065", IdentifierKind::NationalId),
            "17-1003406-5"
        );
    }

    #[test]
    fn formats_tax_id() {
        assert_eq!(
            format_identifier("1710034065001", IdentifierKind::TaxId),
            "17-1003406-500-1"
        );
    }

    #[test]
    fn strips_separators_before_grouping() {
        assert_eq!(
            format_identifier("171.003 406-5", IdentifierKind::NationalId),
            "17-1003406-5"
        );
    }

    #[test]
    fn wrong_length_returns_bare_digits() {
        assert_eq!(format_identifier("12-345", IdentifierKind::NationalId), "12345");
        assert_eq!(
            format_identifier("1710034065", IdentifierKind::TaxId),
            "1710034065"
        );
        assert_eq!(format_identifier("", IdentifierKind::TaxId), "");
    }

    #[test]
    fn kind_mismatch_is_not_grouped() {
        // 13 digits requested as a national ID stay bare.
        assert_eq!(
            format_identifier("1710034065001", IdentifierKind::NationalId),
            "1710034065001"
        );
    }

    #[test]
    fn strip_removes_non_ascii_digits() {
        // Arabic-Indic digit five is not an ASCII digit.
        assert_eq!(strip_non_digits("17\u{0665}10"), "1710");
    }

    #[test]
    fn detect_by_length_after_separators() {
        assert_eq!(
            IdentifierKind::detect("17-1003406-5"),
            Some(IdentifierKind::NationalId)
        );
        assert_eq!(
            IdentifierKind::detect("1710034065001"),
            Some(IdentifierKind::TaxId)
        );
        assert_eq!(
            IdentifierKind::detect(" 171.003.406.5001 "),
            Some(IdentifierKind::TaxId)
        );
        assert_eq!(IdentifierKind::detect("12345"), None);
    }

    #[test]
    fn detect_counts_letters() {
        assert_eq!(
            IdentifierKind::detect("17100340a5"),
            Some(IdentifierKind::NationalId)
        );
        // Ten ASCII digits plus a letter is eleven characters.
        assert_eq!(IdentifierKind::detect("1710034065x"), None);
    }

    #[test]
    fn kind_from_str_aliases() {
        assert_eq!("cedula".parse::<IdentifierKind>().unwrap(), IdentifierKind::NationalId);
        assert_eq!("RUC".parse::<IdentifierKind>().unwrap(), IdentifierKind::TaxId);
        assert_eq!("tax-id".parse::<IdentifierKind>().unwrap(), IdentifierKind::TaxId);
        assert!("passport".parse::<IdentifierKind>().is_err());
    }

    #[test]
    fn kind_serde_names() {
        let json = serde_json::to_string(&IdentifierKind::NationalId).unwrap();
        assert_eq!(json, "\"national_id\"");
        let kind: IdentifierKind = serde_json::from_str("\"tax_id\"").unwrap();
        assert_eq!(kind, IdentifierKind::TaxId);
        assert_eq!(kind.as_str(), "tax_id");
    }

    #[test]
    fn parse_digits_reports_position() {
        let err = parse_digits("17100340a5", IdentifierKind::NationalId).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonDigit {
                kind: IdentifierKind::NationalId,
                position: 8,
                character: 'a',
            }
        );
    }

    #[test]
    fn parse_digits_counts_characters() {
        let err = parse_digits("171003406é", IdentifierKind::NationalId).unwrap_err();
        assert!(matches!(err, ValidationError::NonDigit { position: 9, .. }));
    }
}
