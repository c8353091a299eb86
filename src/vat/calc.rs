use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::round_half_up;
use crate::rates::{VatCategoryConfig, VatTreatment};

/// Category used when the caller does not name one.
pub const DEFAULT_CATEGORY: &str = "STANDARD";

/// Inputs of a single VAT calculation.
///
/// `amount` is the net amount in exclusive mode and the VAT-inclusive gross
/// amount in inclusive mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatRequest {
    pub amount: Decimal,
    pub category: String,
    pub is_export: bool,
    pub vat_inclusive: bool,
}

impl VatRequest {
    /// Exclusive, non-export request in the default category.
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            category: DEFAULT_CATEGORY.to_string(),
            is_export: false,
            vat_inclusive: false,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn export(mut self) -> Self {
        self.is_export = true;
        self
    }

    /// Treat `amount` as already including VAT.
    pub fn inclusive(mut self) -> Self {
        self.vat_inclusive = true;
        self
    }
}

/// Outcome of a VAT calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatResult {
    /// Amount before VAT.
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    /// Amount including VAT.
    pub gross_amount: Decimal,
    /// Applied rate; zero when exempt or zero-rated.
    pub vat_rate: Decimal,
    pub category: String,
    pub is_exempt: bool,
    pub is_zero_rated: bool,
}

impl VatResult {
    pub fn treatment(&self) -> VatTreatment {
        match (self.is_zero_rated, self.is_exempt) {
            (true, _) => VatTreatment::ZeroRated,
            (false, true) => VatTreatment::Exempt,
            (false, false) => VatTreatment::StandardRated,
        }
    }
}

/// Calculate VAT for one transaction.
///
/// Categories unknown to `config` are standard rated. Each of the three
/// output amounts is rounded independently to `decimals` places. An exclusive
/// gross amount saturates at [`Decimal::MAX`].
///
/// ```
/// use gytax::rates::RateTableBuilder;
/// use gytax::rates::RateTable;
/// use gytax::vat::{VatRequest, calculate_vat};
/// use rust_decimal_macros::dec;
///
/// let table = RateTableBuilder::from_table(&RateTable::guyana_2025())
///     .vat_standard_rate(dec!(0.125))
///     .build()
///     .unwrap();
///
/// let exclusive = calculate_vat(&table.vat, &VatRequest::new(dec!(1000)), 0);
/// assert_eq!(exclusive.vat_amount, dec!(125));
/// assert_eq!(exclusive.gross_amount, dec!(1125));
///
/// let inclusive = calculate_vat(&table.vat, &VatRequest::new(dec!(1125)).inclusive(), 0);
/// assert_eq!(inclusive.net_amount, dec!(1000));
/// assert_eq!(inclusive.vat_amount, dec!(125));
/// ```
pub fn calculate_vat(config: &VatCategoryConfig, request: &VatRequest, decimals: u32) -> VatResult {
    let treatment = config.classify(&request.category, request.is_export);
    let vat_rate = config.rate_for(treatment);

    let (net, vat, gross) = if request.vat_inclusive {
        let gross = request.amount;
        // a validated rate keeps the divisor at 1 or above
        let net = gross
            .checked_div(Decimal::ONE.saturating_add(vat_rate))
            .unwrap_or(gross);
        (net, gross.saturating_sub(net), gross)
    } else {
        let net = request.amount;
        let vat = net.saturating_mul(vat_rate);
        (net, vat, net.saturating_add(vat))
    };

    let result = VatResult {
        net_amount: round_half_up(net, decimals),
        vat_amount: round_half_up(vat, decimals),
        gross_amount: round_half_up(gross, decimals),
        vat_rate,
        category: request.category.clone(),
        is_exempt: treatment == VatTreatment::Exempt,
        is_zero_rated: treatment == VatTreatment::ZeroRated,
    };

    debug!(
        category = %result.category,
        ?treatment,
        inclusive = request.vat_inclusive,
        net_amount = %result.net_amount,
        vat_amount = %result.vat_amount,
        "calculated VAT"
    );

    result
}
