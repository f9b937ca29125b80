#![deny(missing_docs)]

//! # ecid-core — Ecuadorian Identifier Primitives
//!
//! Validation, formatting, and classification for the two identifiers a
//! registration form in Ecuador collects: the national identity card number
//! (cédula, 10 digits) and the taxpayer registry number (RUC, 13 digits).
//!
//! ## Design Principles
//!
//! 1. **Total boolean validators.** [`validate_national_id`],
//!    [`validate_tax_id`], [`format_identifier`], and
//!    [`classify_taxpayer_type`] accept any string and never fail the caller.
//!    Malformed input resolves to `false`, the bare digits, or
//!    [`TaxpayerType::Unknown`].
//!
//! 2. **Diagnostic twins.** Every boolean validator has a `check_*` form that
//!    returns a [`ValidationError`] naming exactly which rule was broken.
//!
//! 3. **Newtype wrappers.** [`Cedula`] and [`Ruc`] validate at construction
//!    and at deserialization. A value of either type is always well-formed.
//!
//! 4. **Lenient by default.** A natural-person RUC is accepted without
//!    verifying its embedded cédula unless [`ValidationPolicy::Strict`] is
//!    requested explicitly.
//!
//! ## Crate Policy
//!
//! - No internal crate dependencies.
//! - No `unsafe` code, no global state, no I/O.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod cedula;
pub mod error;
pub mod format;
pub mod identity;
pub mod report;
pub mod ruc;

// Re-export primary types at crate root for ergonomic imports.
pub use cedula::{check_national_id, national_id_check_digit, validate_national_id};
pub use error::{EcidError, ValidationError};
pub use format::{format_identifier, strip_non_digits, IdentifierKind};
pub use identity::{Cedula, Ruc};
pub use report::{inspect, inspect_batch, BatchSummary, IdentifierReport};
pub use ruc::{
    check_tax_id, check_tax_id_with, classify_taxpayer_type, validate_tax_id,
    validate_tax_id_with, RegistrantClass, TaxpayerType, ValidationPolicy,
};
