use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{TaxError, ensure_rate};

/// How a supply is treated for VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VatTreatment {
    /// Taxed at the standard rate.
    StandardRated,
    /// Taxable at 0% (exports and zero-rated categories).
    ZeroRated,
    /// Outside the VAT net.
    Exempt,
}

/// VAT rate, registration threshold and category classification.
///
/// Category keys are matched exactly. A category in neither set is standard
/// rated. Deserialization runs [`validate`](Self::validate), so a
/// deserialized standard rate always lies in [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "VatCategoryRepr")]
pub struct VatCategoryConfig {
    pub standard_rate: Decimal,
    /// Annual taxable supplies above which a business must register.
    pub registration_threshold: Decimal,
    pub zero_rated_categories: BTreeSet<String>,
    pub exempt_categories: BTreeSet<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VatCategoryRepr {
    standard_rate: Decimal,
    registration_threshold: Decimal,
    #[serde(default)]
    zero_rated_categories: BTreeSet<String>,
    #[serde(default)]
    exempt_categories: BTreeSet<String>,
}

impl TryFrom<VatCategoryRepr> for VatCategoryConfig {
    type Error = TaxError;

    fn try_from(repr: VatCategoryRepr) -> Result<Self, Self::Error> {
        let config = Self {
            standard_rate: repr.standard_rate,
            registration_threshold: repr.registration_threshold,
            zero_rated_categories: repr.zero_rated_categories,
            exempt_categories: repr.exempt_categories,
        };
        config.validate()?;
        Ok(config)
    }
}

impl VatCategoryConfig {
    /// Classify a supply.
    ///
    /// Zero-rating is checked first: exports, and categories listed as
    /// zero-rated, are zero-rated even when the same category is also listed
    /// as exempt.
    pub fn classify(&self, category: &str, is_export: bool) -> VatTreatment {
        if is_export || self.zero_rated_categories.contains(category) {
            VatTreatment::ZeroRated
        } else if self.exempt_categories.contains(category) {
            VatTreatment::Exempt
        } else {
            VatTreatment::StandardRated
        }
    }

    /// Rate applied under the given treatment.
    pub fn rate_for(&self, treatment: VatTreatment) -> Decimal {
        match treatment {
            VatTreatment::ZeroRated | VatTreatment::Exempt => Decimal::ZERO,
            VatTreatment::StandardRated => self.standard_rate,
        }
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        ensure_rate("vat.standardRate", self.standard_rate)?;
        if self.registration_threshold < Decimal::ZERO {
            return Err(TaxError::InvalidConfig(
                "VAT registration threshold must not be negative".into(),
            ));
        }
        Ok(())
    }
}
