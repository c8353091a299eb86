//! PAYE progressive income tax.
//!
//! Taxable income is gross salary less allowances (never below zero). It is
//! spread over the bracket schedule from the bottom up; the per-bracket taxes
//! are summed and the sum is rounded once.
//!
//! Sums saturate at [`Decimal::MAX`] instead of overflowing.
//!
//! # Example
//!
//! ```
//! use gytax::paye::*;
//! use gytax::rates::RateTable;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::guyana_2025();
//! let result = calculate_paye(&table.paye, dec!(300000), &Allowances::default(), 0);
//!
//! assert_eq!(result.paye_tax, dec!(46500));
//! assert_eq!(result.net_salary, dec!(253500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{clamp_non_negative, round_half_up};
use crate::rates::TaxBracketTable;

/// Deductible allowances for one pay period. Missing components are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Allowances {
    pub personal: Decimal,
    pub dependent: Decimal,
    pub pension: Decimal,
    pub insurance: Decimal,
}

impl Allowances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn personal(mut self, amount: Decimal) -> Self {
        self.personal = amount;
        self
    }

    pub fn dependent(mut self, amount: Decimal) -> Self {
        self.dependent = amount;
        self
    }

    pub fn pension(mut self, amount: Decimal) -> Self {
        self.pension = amount;
        self
    }

    pub fn insurance(mut self, amount: Decimal) -> Self {
        self.insurance = amount;
        self
    }

    /// Sum of all components, saturating at [`Decimal::MAX`].
    pub fn total(&self) -> Decimal {
        self.personal
            .saturating_add(self.dependent)
            .saturating_add(self.pension)
            .saturating_add(self.insurance)
    }
}

/// Tax attributed to a single bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketTax {
    /// Band label, e.g. `"130000-260000"`.
    pub bracket: String,
    /// Portion of taxable income falling in this band.
    pub taxable_amount: Decimal,
    pub rate: Decimal,
    /// Unrounded tax for this band.
    pub tax: Decimal,
}

/// Outcome of a PAYE calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeResult {
    pub gross_salary: Decimal,
    pub total_allowances: Decimal,
    /// `max(0, gross_salary - total_allowances)`.
    pub taxable_income: Decimal,
    /// Rounded sum of `breakdown[..].tax`.
    pub paye_tax: Decimal,
    /// `gross_salary - paye_tax`. NIS is not deducted here.
    pub net_salary: Decimal,
    pub breakdown: Vec<BracketTax>,
}

impl PayeResult {
    /// Effective tax rate on gross salary (zero for a zero salary).
    pub fn effective_rate(&self) -> Decimal {
        if self.gross_salary.is_zero() {
            Decimal::ZERO
        } else {
            self.paye_tax / self.gross_salary
        }
    }
}

/// Calculate PAYE for one pay period.
///
/// `gross_salary` and every allowance are expected to be non-negative;
/// input validation belongs to the caller. Amounts are rounded to
/// `decimals` places.
pub fn calculate_paye(
    brackets: &TaxBracketTable,
    gross_salary: Decimal,
    allowances: &Allowances,
    decimals: u32,
) -> PayeResult {
    let total_allowances = allowances.total();
    let taxable_income = clamp_non_negative(gross_salary.saturating_sub(total_allowances));

    let mut breakdown = Vec::new();
    let mut total_tax = Decimal::ZERO;

    // Brackets are ascending: once taxable income no longer exceeds a
    // bracket's floor, no later bracket can contribute.
    for bracket in brackets.iter().take_while(|b| taxable_income > b.min) {
        let above_floor = taxable_income - bracket.min;
        let taxable_in_bracket = match bracket.span() {
            Some(span) => above_floor.min(span),
            None => above_floor,
        };
        if taxable_in_bracket <= Decimal::ZERO {
            break;
        }

        let tax = taxable_in_bracket.saturating_mul(bracket.rate);
        total_tax = total_tax.saturating_add(tax);
        breakdown.push(BracketTax {
            bracket: bracket.label(),
            taxable_amount: taxable_in_bracket,
            rate: bracket.rate,
            tax,
        });
    }

    let paye_tax = round_half_up(total_tax, decimals);
    let net_salary = round_half_up(gross_salary.saturating_sub(paye_tax), decimals);

    debug!(
        %gross_salary,
        %taxable_income,
        %paye_tax,
        marginal_rate = %brackets.marginal_rate(taxable_income),
        bands = breakdown.len(),
        "calculated PAYE"
    );

    PayeResult {
        gross_salary,
        total_allowances,
        taxable_income,
        paye_tax,
        net_salary,
        breakdown,
    }
}
