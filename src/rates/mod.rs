//! Versioned rate configuration.
//!
//! A [`RateTable`] bundles the PAYE schedule, NIS contribution rates and VAT
//! classification of one fiscal year. Tables are plain values passed into the
//! engines; several years can be held side by side in a [`RateRegistry`].
//!
//! # Example
//!
//! ```
//! use gytax::rates::*;
//! use rust_decimal_macros::dec;
//!
//! let registry = RateRegistry::builtin();
//! let table = registry.get(2025).unwrap();
//! assert_eq!(table.nis.monthly_ceiling, dec!(280000));
//! assert_eq!(
//!     table.vat.classify("BASIC_FOOD", false),
//!     VatTreatment::ZeroRated
//! );
//! ```

mod brackets;
mod contribution;
mod registry;
mod table;
mod vat_config;

pub use brackets::{TaxBracket, TaxBracketTable};
pub use contribution::ContributionRateConfig;
pub use registry::RateRegistry;
pub use table::{RateTable, RateTableBuilder};
pub use vat_config::{VatCategoryConfig, VatTreatment};
