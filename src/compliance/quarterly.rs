use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gra_form::VatTotals;
use super::period::TaxQuarter;
use crate::core::{clamp_non_negative, round_half_up};
use crate::vat::VatResult;

/// Chooses the corporate tax rate for a quarter.
///
/// Implementations must be pure: the same revenue and profit always give the
/// same rate.
pub trait CorporateTaxPolicy: Send + Sync {
    /// Rate (fraction) applied to `taxable_profit`.
    fn rate(&self, revenue: Decimal, taxable_profit: Decimal) -> Decimal;

    /// Short name recorded in logs.
    fn name(&self) -> &'static str;
}

/// Simplified two-tier corporate rate keyed on revenue.
///
/// Revenue below `revenue_threshold` is taxed at `lower_rate`; revenue at or
/// above it at `upper_rate`. This is an estimation policy, not the statutory
/// commercial/non-commercial company split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedCorporateRate {
    pub revenue_threshold: Decimal,
    pub lower_rate: Decimal,
    pub upper_rate: Decimal,
}

impl Default for SimplifiedCorporateRate {
    fn default() -> Self {
        Self {
            revenue_threshold: dec!(5_000_000),
            lower_rate: dec!(0.25),
            upper_rate: dec!(0.30),
        }
    }
}

impl CorporateTaxPolicy for SimplifiedCorporateRate {
    fn rate(&self, revenue: Decimal, _taxable_profit: Decimal) -> Decimal {
        if revenue >= self.revenue_threshold {
            self.upper_rate
        } else {
            self.lower_rate
        }
    }

    fn name(&self) -> &'static str {
        "simplified"
    }
}

/// A single rate regardless of revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatCorporateRate(pub Decimal);

impl CorporateTaxPolicy for FlatCorporateRate {
    fn rate(&self, _revenue: Decimal, _taxable_profit: Decimal) -> Decimal {
        self.0
    }

    fn name(&self) -> &'static str {
        "flat"
    }
}

/// Business figures for one quarter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuarterlyTaxInput {
    pub revenue: Decimal,
    pub expenses: Decimal,
    /// Output VAT charged on sales.
    pub vat_collected: Decimal,
    /// Input VAT paid on purchases.
    pub vat_paid: Decimal,
}

impl QuarterlyTaxInput {
    pub fn new(revenue: Decimal, expenses: Decimal) -> Self {
        Self {
            revenue,
            expenses,
            ..Self::default()
        }
    }

    pub fn vat(mut self, collected: Decimal, paid: Decimal) -> Self {
        self.vat_collected = collected;
        self.vat_paid = paid;
        self
    }

    /// Take VAT collected and paid from sale and purchase calculations.
    pub fn vat_from_results(self, sales: &[VatResult], purchases: &[VatResult]) -> Self {
        let collected = VatTotals::from_results(sales).total_vat;
        let paid = VatTotals::from_results(purchases).total_vat;
        self.vat(collected, paid)
    }
}

/// Estimated tax for one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyTaxResult {
    pub period: TaxQuarter,
    pub revenue: Decimal,
    pub expenses: Decimal,
    /// `max(0, revenue - expenses)`.
    pub taxable_profit: Decimal,
    pub corporate_tax_rate: Decimal,
    pub corporate_tax: Decimal,
    pub vat_collected: Decimal,
    pub vat_paid: Decimal,
    /// `max(0, vat_collected - vat_paid)`.
    pub vat_payable: Decimal,
    /// `max(0, vat_paid - vat_collected)`; reported, never netted against tax.
    pub vat_credit: Decimal,
    /// `corporate_tax + vat_payable`.
    pub total_tax_liability: Decimal,
}

/// Estimate corporate tax and net VAT for a quarter. Amounts saturate at
/// [`Decimal::MAX`] in either direction.
pub fn calculate_quarterly_tax(
    period: TaxQuarter,
    input: &QuarterlyTaxInput,
    policy: &dyn CorporateTaxPolicy,
    decimals: u32,
) -> QuarterlyTaxResult {
    let taxable_profit = clamp_non_negative(input.revenue.saturating_sub(input.expenses));
    let corporate_tax_rate = policy.rate(input.revenue, taxable_profit);
    let corporate_tax =
        round_half_up(taxable_profit.saturating_mul(corporate_tax_rate), decimals);

    let vat_balance = input.vat_collected.saturating_sub(input.vat_paid);
    let vat_payable = clamp_non_negative(vat_balance);
    let vat_credit = clamp_non_negative(-vat_balance);

    let total_tax_liability = corporate_tax.saturating_add(vat_payable);

    debug!(
        %period,
        policy = policy.name(),
        %taxable_profit,
        %corporate_tax_rate,
        %corporate_tax,
        %vat_payable,
        "calculated quarterly tax"
    );

    QuarterlyTaxResult {
        period,
        revenue: input.revenue,
        expenses: input.expenses,
        taxable_profit,
        corporate_tax_rate,
        corporate_tax,
        vat_collected: input.vat_collected,
        vat_paid: input.vat_paid,
        vat_payable,
        vat_credit,
        total_tax_liability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q1() -> TaxQuarter {
        TaxQuarter::new(2025, 1).unwrap()
    }

    #[test]
    fn below_threshold_uses_lower_rate() {
        let input = QuarterlyTaxInput::new(dec!(4_000_000), dec!(1_000_000));
        let r = calculate_quarterly_tax(q1(), &input, &SimplifiedCorporateRate::default(), 0);
        assert_eq!(r.taxable_profit, dec!(3_000_000));
        assert_eq!(r.corporate_tax_rate, dec!(0.25));
        assert_eq!(r.corporate_tax, dec!(750_000));
        assert_eq!(r.total_tax_liability, dec!(750_000));
    }

    #[test]
    fn at_threshold_uses_upper_rate() {
        let input = QuarterlyTaxInput::new(dec!(5_000_000), dec!(1_000_000));
        let r = calculate_quarterly_tax(q1(), &input, &SimplifiedCorporateRate::default(), 0);
        assert_eq!(r.corporate_tax_rate, dec!(0.30));
        assert_eq!(r.corporate_tax, dec!(1_200_000));
    }

    #[test]
    fn loss_clamps_profit() {
        let input = QuarterlyTaxInput::new(dec!(1_000_000), dec!(2_000_000));
        let r = calculate_quarterly_tax(q1(), &input, &SimplifiedCorporateRate::default(), 0);
        assert_eq!(r.taxable_profit, dec!(0));
        assert_eq!(r.corporate_tax, dec!(0));
    }

    #[test]
    fn vat_payable_added_to_liability() {
        let input =
            QuarterlyTaxInput::new(dec!(1_000_000), dec!(600_000)).vat(dec!(140_000), dec!(40_000));
        let r = calculate_quarterly_tax(q1(), &input, &SimplifiedCorporateRate::default(), 0);
        assert_eq!(r.vat_payable, dec!(100_000));
        assert_eq!(r.vat_credit, dec!(0));
        assert_eq!(r.total_tax_liability, dec!(100_000) + dec!(100_000));
    }

    #[test]
    fn vat_credit_is_not_negative_tax() {
        let input =
            QuarterlyTaxInput::new(dec!(1_000_000), dec!(600_000)).vat(dec!(10_000), dec!(50_000));
        let r = calculate_quarterly_tax(q1(), &input, &SimplifiedCorporateRate::default(), 0);
        assert_eq!(r.vat_payable, dec!(0));
        assert_eq!(r.vat_credit, dec!(40_000));
        assert_eq!(r.total_tax_liability, r.corporate_tax);
    }

    #[test]
    fn pluggable_policy() {
        let input = QuarterlyTaxInput::new(dec!(9_000_000), dec!(0));
        let r = calculate_quarterly_tax(q1(), &input, &FlatCorporateRate(dec!(0.4)), 0);
        assert_eq!(r.corporate_tax, dec!(3_600_000));
    }

    #[test]
    fn extreme_figures_saturate() {
        let input =
            QuarterlyTaxInput::new(Decimal::MAX, Decimal::MIN).vat(Decimal::MAX, Decimal::MIN);
        let r = calculate_quarterly_tax(q1(), &input, &FlatCorporateRate(dec!(2)), 0);
        assert_eq!(r.taxable_profit, Decimal::MAX);
        assert_eq!(r.corporate_tax, Decimal::MAX);
        assert_eq!(r.vat_payable, Decimal::MAX);
        assert_eq!(r.total_tax_liability, Decimal::MAX);
    }

    #[test]
    fn corporate_tax_is_rounded() {
        let input = QuarterlyTaxInput::new(dec!(1001), dec!(0));
        let r = calculate_quarterly_tax(q1(), &input, &FlatCorporateRate(dec!(0.25)), 0);
        // 250.25 → 250
        assert_eq!(r.corporate_tax, dec!(250));
    }
}
