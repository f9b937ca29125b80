//! # Identifier Newtypes
//!
//! [`Cedula`] and [`Ruc`] wrap an identifier that has already passed
//! validation. The stored form is always the bare digit string; `Display`
//! renders the grouped form.
//!
//! Constructors accept either the bare digits or the exact grouped form
//! produced by [`format_identifier`](crate::format::format_identifier):
//!
//! - `"1710034065"` or `"17-1003406-5"`
//! - `"1710034065001"` or `"17-1003406-500-1"`

use serde::{Deserialize, Serialize};

use crate::cedula::check_national_id;
use crate::error::ValidationError;
use crate::format::{format_identifier, IdentifierKind};
use crate::ruc::{
    check_tax_id_with, classify_taxpayer_type, RegistrantClass, TaxpayerType, ValidationPolicy,
};

/// Deserialize a string newtype through its validating `new()` so that
/// invalid values are rejected instead of silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Strip the hyphens of a grouped identifier, rejecting any layout other
/// than the canonical one for `kind`.
fn canonical_digits(raw: &str, kind: IdentifierKind) -> Result<String, ValidationError> {
    if !raw.contains('-') {
        return Ok(raw.to_string());
    }
    let digits: String = raw.chars().filter(|c| *c != '-').collect();
    if format_identifier(&digits, kind) != raw {
        return Err(ValidationError::Grouping {
            kind,
            value: raw.to_string(),
        });
    }
    Ok(digits)
}

/// A validated Ecuadorian cédula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cedula(String);

impl_validating_deserialize!(Cedula);

impl Cedula {
    /// Create a cédula, validating format and check digit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Grouping`] for a hyphenated value that is
    /// not `DD-DDDDDDD-D`, otherwise the error from
    /// [`check_national_id`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = canonical_digits(&raw, IdentifierKind::NationalId)?;
        check_national_id(&digits)?;
        Ok(Self(digits))
    }

    /// The bare ten-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The grouped form: `DD-DDDDDDD-D`.
    pub fn formatted(&self) -> String {
        format_identifier(&self.0, IdentifierKind::NationalId)
    }

    /// The first two digits, the code of the issuing province.
    pub fn province_code(&self) -> &str {
        &self.0[..2]
    }

    /// The tenth digit.
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[9] - b'0'
    }
}

impl std::fmt::Display for Cedula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Cedula {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A validated Ecuadorian RUC.
///
/// Serializes as the bare digit string. The registrant class is the one
/// validation selected from the third digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Ruc {
    digits: String,
    class: RegistrantClass,
}

impl_validating_deserialize!(Ruc);

impl Ruc {
    /// Create a RUC under the lenient policy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Grouping`] for a hyphenated value that is
    /// not `DD-DDDDDDD-DDD-D`, otherwise the error from
    /// [`check_tax_id_with`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_policy(value, ValidationPolicy::Lenient)
    }

    /// Create a RUC under an explicit policy.
    ///
    /// # Errors
    ///
    /// Same as [`Ruc::new`], plus
    /// [`ValidationError::EmbeddedNationalId`] under strict policy.
    pub fn with_policy(
        value: impl Into<String>,
        policy: ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = canonical_digits(&raw, IdentifierKind::TaxId)?;
        let class = check_tax_id_with(&digits, policy)?;
        Ok(Self { digits, class })
    }

    /// The bare thirteen-digit form.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The grouped form: `DD-DDDDDDD-DDD-D`.
    pub fn formatted(&self) -> String {
        format_identifier(&self.digits, IdentifierKind::TaxId)
    }

    /// Registrant class selected by the third digit.
    pub fn registrant_class(&self) -> RegistrantClass {
        self.class
    }

    /// Taxpayer type from the establishment digits.
    pub fn taxpayer_type(&self) -> TaxpayerType {
        classify_taxpayer_type(&self.digits)
    }

    /// The establishment digits (positions 10–12).
    pub fn establishment(&self) -> &str {
        &self.digits[10..]
    }

    /// The embedded cédula of a natural-person RUC, when its first ten
    /// digits are a valid cédula.
    pub fn national_id(&self) -> Option<Cedula> {
        if self.class != RegistrantClass::NaturalPerson {
            return None;
        }
        Cedula::new(&self.digits[..10]).ok()
    }
}

impl std::fmt::Display for Ruc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Ruc {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Cedula> for String {
    fn from(cedula: Cedula) -> Self {
        cedula.0
    }
}

impl From<Ruc> for String {
    fn from(ruc: Ruc) -> Self {
        ruc.digits
    }
}
