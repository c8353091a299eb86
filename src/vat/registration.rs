//! VAT registration threshold check.
//!
//! A business whose annual taxable supplies exceed the registration
//! threshold must register for VAT. Supplies at exactly the threshold do not
//! trigger registration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rates::VatCategoryConfig;

/// Result of a VAT registration check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatRegistrationStatus {
    /// Whether the business must register for VAT.
    pub required: bool,
    /// Annual taxable supplies used in the check.
    pub taxable_supplies: Decimal,
    /// Threshold from the rate table.
    pub threshold: Decimal,
    /// If registration is required, the reason why.
    pub reason: Option<String>,
}

/// Check whether `annual_taxable_supplies` require VAT registration.
pub fn check_vat_registration(
    config: &VatCategoryConfig,
    annual_taxable_supplies: Decimal,
) -> VatRegistrationStatus {
    let threshold = config.registration_threshold;

    if annual_taxable_supplies > threshold {
        return VatRegistrationStatus {
            required: true,
            taxable_supplies: annual_taxable_supplies,
            threshold,
            reason: Some(format!(
                "annual taxable supplies {annual_taxable_supplies} exceed registration threshold of {threshold}"
            )),
        };
    }

    VatRegistrationStatus {
        required: false,
        taxable_supplies: annual_taxable_supplies,
        threshold,
        reason: None,
    }
}
