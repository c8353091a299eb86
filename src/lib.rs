//! # gytax
//!
//! Guyanese payroll and business tax calculations: PAYE income tax, NIS
//! contributions, VAT, per-employee payroll, quarterly tax estimates and GRA
//! return figures.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every calculation is a pure function of its inputs and a [`RateTable`];
//! tables are versioned per fiscal year and selected by the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use gytax::*;
//! use rust_decimal_macros::dec;
//!
//! let engine = TaxEngine::new(RateTable::guyana_2025()).unwrap();
//!
//! let pay = engine.payroll(dec!(300000), &Allowances::default());
//! assert_eq!(pay.paye.paye_tax, dec!(46500));
//! assert_eq!(pay.nis.employee_contribution, dec!(15680));
//! assert_eq!(pay.net_pay, dec!(237820));
//!
//! let sale = engine.vat(&VatRequest::new(dec!(1000)).category("BASIC_FOOD"));
//! assert!(sale.is_zero_rated);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Rate tables, PAYE, NIS, VAT, payroll, [`TaxEngine`] |
//! | `compliance` (default) | Quarterly tax estimates, GRA form data |
//! | `json` | Load and save rate tables as JSON |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod rates;

#[cfg(feature = "core")]
pub mod paye;

#[cfg(feature = "core")]
pub mod nis;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "core")]
pub mod payroll;

#[cfg(feature = "compliance")]
pub mod compliance;

#[cfg(feature = "core")]
mod engine;

// Re-export the everyday types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::{PayFrequency, TaxError, round_half_up};
#[cfg(feature = "core")]
pub use crate::engine::TaxEngine;
#[cfg(feature = "core")]
pub use crate::nis::NisResult;
#[cfg(feature = "core")]
pub use crate::paye::{Allowances, PayeResult};
#[cfg(feature = "core")]
pub use crate::payroll::PayrollResult;
#[cfg(feature = "core")]
pub use crate::rates::{RateRegistry, RateTable};
#[cfg(feature = "core")]
pub use crate::vat::{VatRequest, VatResult};
