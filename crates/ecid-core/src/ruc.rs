//! # RUC Structural Validation and Taxpayer Classification
//!
//! A RUC is thirteen decimal digits. Its third digit selects the registrant
//! class, and each class requires a fixed establishment suffix:
//!
//! | Third digit | Class | Required suffix |
//! |-------------|-------|-----------------|
//! | 0–5 | Natural person | last 3 = `001` |
//! | 6 | Public institution | last 4 = `0001` |
//! | 9 | Private entity | last 3 = `001` |
//! | 7, 8 | — | rejected |
//!
//! ## Lenient vs. strict
//!
//! Under [`ValidationPolicy::Lenient`] (the default) the first ten digits of a
//! natural-person RUC are not checked against the cédula algorithm.
//! [`ValidationPolicy::Strict`] adds that check. Public-institution and
//! private-entity RUCs are validated identically under both policies.

use serde::{Deserialize, Serialize};

use crate::cedula::check_national_id;
use crate::error::ValidationError;
use crate::format::{parse_digits, IdentifierKind, NATIONAL_ID_LENGTH, TAX_ID_LENGTH};

/// How much of a RUC to verify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Structure and establishment suffix only.
    #[default]
    Lenient,
    /// Also require a natural-person RUC to embed a valid cédula.
    Strict,
}

/// Registrant class selected by the third digit of a RUC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrantClass {
    /// Third digit 0 through 5.
    NaturalPerson,
    /// Third digit 6.
    PublicInstitution,
    /// Third digit 9.
    PrivateEntity,
}

impl RegistrantClass {
    /// Map a RUC third digit to its class.
    pub fn from_third_digit(digit: u8) -> Option<Self> {
        match digit {
            0..=5 => Some(Self::NaturalPerson),
            6 => Some(Self::PublicInstitution),
            9 => Some(Self::PrivateEntity),
            _ => None,
        }
    }

    /// Trailing digits every RUC of this class must end with.
    pub fn establishment_suffix(&self) -> &'static str {
        match self {
            Self::NaturalPerson | Self::PrivateEntity => "001",
            Self::PublicInstitution => "0001",
        }
    }
}

impl std::fmt::Display for RegistrantClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NaturalPerson => "natural person",
            Self::PublicInstitution => "public institution",
            Self::PrivateEntity => "private entity",
        };
        f.write_str(s)
    }
}

/// Taxpayer classification read from the last three digits of a RUC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxpayerType {
    /// Individual taxpayer (`001` or `003`).
    Natural,
    /// Legal entity (`002`).
    Juridical,
    /// Invalid RUC or unrecognized code.
    Unknown,
}

impl TaxpayerType {
    /// The snake_case name used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Juridical => "juridical",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TaxpayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` if `value` is a structurally valid RUC under the lenient
/// policy. Never panics.
pub fn validate_tax_id(value: &str) -> bool {
    check_tax_id(value).is_ok()
}

/// Returns `true` if `value` is a valid RUC under `policy`.
pub fn validate_tax_id_with(value: &str, policy: ValidationPolicy) -> bool {
    check_tax_id_with(value, policy).is_ok()
}

/// Validate a RUC under the lenient policy.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing the failed rule.
pub fn check_tax_id(value: &str) -> Result<RegistrantClass, ValidationError> {
    check_tax_id_with(value, ValidationPolicy::Lenient)
}

/// Validate a RUC under `policy`, returning its registrant class.
///
/// # Errors
///
/// Returns [`ValidationError::WrongLength`] or [`ValidationError::NonDigit`]
/// for malformed input, [`ValidationError::UnsupportedThirdDigit`] for a
/// third digit of 7 or 8, [`ValidationError::EstablishmentSuffix`] when the
/// suffix does not match the class, and, under strict policy,
/// [`ValidationError::EmbeddedNationalId`] when a natural-person RUC embeds
/// an invalid cédula.
pub fn check_tax_id_with(
    value: &str,
    policy: ValidationPolicy,
) -> Result<RegistrantClass, ValidationError> {
    let digits = parse_digits(value, IdentifierKind::TaxId)?;

    let class = RegistrantClass::from_third_digit(digits[2]).ok_or_else(|| {
        ValidationError::UnsupportedThirdDigit {
            value: value.to_string(),
            digit: digits[2],
        }
    })?;

    let suffix = class.establishment_suffix();
    if !value.ends_with(suffix) {
        return Err(ValidationError::EstablishmentSuffix {
            value: value.to_string(),
            expected: suffix,
        });
    }

    // All thirteen characters are ASCII digits, so byte slicing is safe.
    if policy == ValidationPolicy::Strict && class == RegistrantClass::NaturalPerson {
        check_national_id(&value[..NATIONAL_ID_LENGTH]).map_err(|source| {
            ValidationError::EmbeddedNationalId {
                value: value.to_string(),
                source: Box::new(source),
            }
        })?;
    }

    Ok(class)
}

/// Classify the taxpayer behind a RUC.
///
/// Invalid RUCs (lenient policy) are [`TaxpayerType::Unknown`]. Valid ones
/// are classified by the three digits at positions 10–12: `001` and `003`
/// are natural, `002` is juridical, anything else is unknown.
pub fn classify_taxpayer_type(value: &str) -> TaxpayerType {
    if check_tax_id(value).is_err() {
        return TaxpayerType::Unknown;
    }
    match &value[NATIONAL_ID_LENGTH..TAX_ID_LENGTH] {
        "001" | "003" => TaxpayerType::Natural,
        "002" => TaxpayerType::Juridical,
        _ => TaxpayerType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_person_with_001_suffix() {
        assert!(validate_tax_id("1710034065001"));
        assert_eq!(
            check_tax_id("1710034065001"),
            Ok(RegistrantClass::NaturalPerson)
        );
    }

    #[test]
    fn natural_person_wrong_suffix() {
        assert!(!validate_tax_id("1710034065002"));
        assert_eq!(
            check_tax_id("1710034065002"),
            Err(ValidationError::EstablishmentSuffix {
                value: "1710034065002".to_string(),
                expected: "001",
            })
        );
    }

    #[test]
    fn public_institution_needs_0001() {
        assert_eq!(
            check_tax_id("1768000690001"),
            Ok(RegistrantClass::PublicInstitution)
        );
        // Ends in 001 but not 0001.
        assert!(!validate_tax_id("1768000691001"));
    }

    #[test]
    fn private_entity_with_001_suffix() {
        assert_eq!(
            check_tax_id("1790012345001"),
            Ok(RegistrantClass::PrivateEntity)
        );
        assert!(!validate_tax_id("1790012345002"));
    }

    #[test]
    fn third_digit_seven_and_eight_rejected() {
        assert!(matches!(
            check_tax_id("1770034065001"),
            Err(ValidationError::UnsupportedThirdDigit { digit: 7, .. })
        ));
        assert!(!validate_tax_id("1780034065001"));
    }

    #[test]
    fn every_natural_third_digit_accepted() {
        for t in 0..=5 {
            let ruc = format!("17{t}0034065001");
            assert!(validate_tax_id(&ruc), "{ruc} should be valid");
        }
    }

    #[test]
    fn malformed_input_rejected() {
        assert!(!validate_tax_id(""));
        assert!(!validate_tax_id("1710034065"));
        assert!(!validate_tax_id("17100340650011"));
        assert!(!validate_tax_id("17-10034065-001"));
        assert!(!validate_tax_id("171003406500a"));
    }

    #[test]
    fn lenient_ignores_embedded_cedula() {
        // 1710034066 fails the check digit, but lenient policy does not look.
        assert!(validate_tax_id("1710034066001"));
    }

    #[test]
    fn strict_rejects_invalid_embedded_cedula() {
        assert!(!validate_tax_id_with("1710034066001", ValidationPolicy::Strict));
        let err = check_tax_id_with("1710034066001", ValidationPolicy::Strict).unwrap_err();
        match err {
            ValidationError::EmbeddedNationalId { value, source } => {
                assert_eq!(value, "1710034066001");
                assert!(matches!(*source, ValidationError::CheckDigitMismatch { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_accepts_valid_embedded_cedula() {
        assert!(validate_tax_id_with("1710034065001", ValidationPolicy::Strict));
    }

    #[test]
    fn strict_does_not_inspect_entity_prefixes() {
        assert!(validate_tax_id_with("1768000690001", ValidationPolicy::Strict));
        assert!(validate_tax_id_with("1790012345001", ValidationPolicy::Strict));
    }

    #[test]
    fn classify_valid_ruc_is_natural() {
        assert_eq!(classify_taxpayer_type("1710034065001"), TaxpayerType::Natural);
        assert_eq!(classify_taxpayer_type("1768000690001"), TaxpayerType::Natural);
        assert_eq!(classify_taxpayer_type("1790012345001"), TaxpayerType::Natural);
    }

    #[test]
    fn classify_invalid_ruc_is_unknown() {
        // 002 and 003 suffixes fail the establishment rule before
        // classification is reached.
        assert_eq!(classify_taxpayer_type("1710034065002"), TaxpayerType::Unknown);
        assert_eq!(classify_taxpayer_type("1710034065003"), TaxpayerType::Unknown);
        assert_eq!(classify_taxpayer_type("not a ruc"), TaxpayerType::Unknown);
        assert_eq!(classify_taxpayer_type(""), TaxpayerType::Unknown);
    }

    #[test]
    fn registrant_class_suffixes() {
        assert_eq!(RegistrantClass::NaturalPerson.establishment_suffix(), "001");
        assert_eq!(RegistrantClass::PublicInstitution.establishment_suffix(), "0001");
        assert_eq!(RegistrantClass::PrivateEntity.establishment_suffix(), "001");
        assert_eq!(RegistrantClass::from_third_digit(7), None);
        assert_eq!(RegistrantClass::from_third_digit(8), None);
    }

    #[test]
    fn policy_defaults_to_lenient() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Lenient);
    }

    #[test]
    fn taxpayer_type_serde() {
        let json = serde_json::to_string(&TaxpayerType::Juridical).unwrap();
        assert_eq!(json, "\"juridical\"");
        assert_eq!(format!("{}", TaxpayerType::Natural), "natural");
    }
}
