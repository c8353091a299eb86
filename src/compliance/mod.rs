//! Business-level aggregations: quarterly tax estimates and GRA return data.
//!
//! Nothing here calculates tax on individual items; these functions only
//! combine PAYE, NIS and VAT results that were computed by the engines.
//!
//! # Example
//!
//! ```
//! use gytax::compliance::*;
//! use rust_decimal_macros::dec;
//!
//! let q = TaxQuarter::new(2025, 1).unwrap();
//! let input = QuarterlyTaxInput::new(dec!(4_000_000), dec!(1_000_000))
//!     .vat(dec!(560_000), dec!(140_000));
//! let r = calculate_quarterly_tax(q, &input, &SimplifiedCorporateRate::default(), 0);
//!
//! assert_eq!(r.corporate_tax, dec!(750_000));
//! assert_eq!(r.vat_payable, dec!(420_000));
//! assert_eq!(r.total_tax_liability, dec!(1_170_000));
//! ```

mod gra_form;
mod period;
mod quarterly;

pub use gra_form::{GraFormData, VatTotals, generate_gra_tax_form_data};
pub use period::TaxQuarter;
pub use quarterly::{
    CorporateTaxPolicy, FlatCorporateRate, QuarterlyTaxInput, QuarterlyTaxResult,
    SimplifiedCorporateRate, calculate_quarterly_tax,
};
