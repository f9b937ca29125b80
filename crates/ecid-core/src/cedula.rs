//! # Cédula Check-Digit Validation
//!
//! A cédula is ten decimal digits. The first nine are weighted with the
//! alternating coefficients `2,1,2,1,2,1,2,1,2`; any product of ten or more
//! is reduced by nine (the sum of its two digits). The tenth digit must equal
//! `(10 - sum % 10) % 10`.
//!
//! The first digit must be 0, 1, or 2.

use crate::error::ValidationError;
use crate::format::{parse_digits, IdentifierKind, NATIONAL_ID_LENGTH};

/// Weights applied to the first nine digits.
const COEFFICIENTS: [u8; NATIONAL_ID_LENGTH - 1] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Highest accepted leading digit.
pub const MAX_LEADING_DIGIT: u8 = 2;

/// Returns `true` if `value` is a structurally valid cédula.
///
/// Never panics. Wrong length, non-digit characters, a leading digit above
/// 2, or a check-digit mismatch all yield `false`.
pub fn validate_national_id(value: &str) -> bool {
    check_national_id(value).is_ok()
}

/// Validate a cédula, reporting the first rule it breaks.
///
/// Rules are checked in order: length, digits only, leading digit, check
/// digit.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing the failed rule.
pub fn check_national_id(value: &str) -> Result<(), ValidationError> {
    let digits = parse_digits(value, IdentifierKind::NationalId)?;

    let leading = digits[0];
    if leading > MAX_LEADING_DIGIT {
        return Err(ValidationError::LeadingDigitOutOfRange {
            value: value.to_string(),
            digit: leading,
        });
    }

    let expected = check_digit(&digits[..NATIONAL_ID_LENGTH - 1]);
    let found = digits[NATIONAL_ID_LENGTH - 1];
    if expected != found {
        return Err(ValidationError::CheckDigitMismatch {
            value: value.to_string(),
            expected,
            found,
        });
    }

    Ok(())
}

/// Compute the cédula check digit for a nine-digit body.
///
/// Returns `None` unless `body` is exactly nine ASCII digits. The leading
/// digit is not range-checked here.
pub fn national_id_check_digit(body: &str) -> Option<u8> {
    if body.len() != NATIONAL_ID_LENGTH - 1 || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
    Some(check_digit(&digits))
}

fn check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .zip(COEFFICIENTS)
        .map(|(&digit, weight)| {
            let product = u32::from(digit * weight);
            if product >= 10 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    match sum % 10 {
        0 => 0,
        remainder => (10 - remainder) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_cedula() {
        assert!(validate_national_id("1710034065"));
    }

    #[test]
    fn rejects_check_digit_mismatch() {
        assert!(!validate_national_id("1710034066"));
        assert_eq!(
            check_national_id("1710034066"),
            Err(ValidationError::CheckDigitMismatch {
                value: "1710034066".to_string(),
                expected: 5,
                found: 6,
            })
        );
    }

    #[test]
    fn rejects_leading_digit_above_two() {
        assert!(!validate_national_id("9710034065"));
        assert!(matches!(
            check_national_id("9710034065"),
            Err(ValidationError::LeadingDigitOutOfRange { digit: 9, .. })
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate_national_id("12345"));
        assert!(!validate_national_id(""));
        assert!(!validate_national_id("17100340650"));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(!validate_national_id("17-1003406"));
        assert!(!validate_national_id("171003406 "));
        assert!(!validate_national_id("１７１００３４０６５"));
    }

    #[test]
    fn leading_zero_is_accepted() {
        // 0 1 0 0 0 0 0 0 0 -> products 0 1 0 0 0 0 0 0 0, sum 1, check 9.
        assert!(validate_national_id("0100000009"));
    }

    #[test]
    fn zero_remainder_gives_zero_check_digit() {
        // All-zero body sums to 0.
        assert_eq!(national_id_check_digit("000000000"), Some(0));
        assert!(validate_national_id("0000000000"));
    }

    #[test]
    fn products_above_nine_are_reduced() {
        // 2*9 = 18 -> 9 on every even position: 9*5 + 9*4 = 81, check 9.
        assert_eq!(national_id_check_digit("999999999"), Some(9));
    }

    #[test]
    fn check_digit_of_known_body() {
        assert_eq!(national_id_check_digit("171003406"), Some(5));
    }

    #[test]
    fn check_digit_rejects_bad_body() {
        assert_eq!(national_id_check_digit("17100340"), None);
        assert_eq!(national_id_check_digit("17100340a"), None);
        assert_eq!(national_id_check_digit(""), None);
    }
}
