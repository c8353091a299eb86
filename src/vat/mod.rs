//! Transaction-level VAT and registration checks.
//!
//! Supplies are classified as standard rated, zero-rated or exempt from the
//! category lists of the rate table, then VAT is computed on an exclusive
//! (net) or inclusive (gross) amount.
//!
//! # Example
//!
//! ```
//! use gytax::rates::RateTable;
//! use gytax::vat::*;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::guyana_2025();
//!
//! let sale = calculate_vat(&table.vat, &VatRequest::new(dec!(1000)), 0);
//! assert_eq!(sale.vat_amount, dec!(140));
//!
//! let food = calculate_vat(&table.vat, &VatRequest::new(dec!(1000)).category("BASIC_FOOD"), 0);
//! assert!(food.is_zero_rated);
//!
//! let status = check_vat_registration(&table.vat, dec!(20_000_000));
//! assert!(status.required);
//! ```

mod calc;
mod registration;

pub use crate::rates::VatTreatment;
pub use calc::{DEFAULT_CATEGORY, VatRequest, VatResult, calculate_vat};
pub use registration::{VatRegistrationStatus, check_vat_registration};
