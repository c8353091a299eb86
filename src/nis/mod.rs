//! NIS social-security contributions.
//!
//! Wages are capped at the insurable-earnings ceiling for the pay frequency,
//! then the employee and employer shares are each computed and rounded from
//! the capped base. The total is the sum of the two rounded shares.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PayFrequency, round_half_up};
use crate::rates::ContributionRateConfig;

/// Outcome of an NIS calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NisResult {
    pub gross_wages: Decimal,
    /// `min(gross_wages, ceiling[frequency])`.
    pub capped_wages: Decimal,
    pub employee_contribution: Decimal,
    pub employer_contribution: Decimal,
    /// `employee_contribution + employer_contribution`.
    pub total_contribution: Decimal,
    pub frequency: PayFrequency,
}

impl NisResult {
    /// Whether the wages exceeded the insurable-earnings ceiling.
    pub fn is_capped(&self) -> bool {
        self.capped_wages < self.gross_wages
    }
}

/// Calculate NIS contributions for one pay period.
///
/// With `employee_only` set the employer share is zero (e.g. when the
/// employer side is remitted elsewhere).
///
/// ```
/// use gytax::core::PayFrequency;
/// use gytax::nis::calculate_nis;
/// use gytax::rates::RateTable;
/// use rust_decimal_macros::dec;
///
/// let table = RateTable::guyana_2025();
/// let r = calculate_nis(&table.nis, dec!(500000), PayFrequency::Monthly, false, 0);
/// assert_eq!(r.capped_wages, dec!(280000));
/// assert_eq!(r.employee_contribution, dec!(15680));
/// assert_eq!(r.employer_contribution, dec!(23520));
/// ```
pub fn calculate_nis(
    config: &ContributionRateConfig,
    gross_wages: Decimal,
    frequency: PayFrequency,
    employee_only: bool,
    decimals: u32,
) -> NisResult {
    let capped_wages = gross_wages.min(config.ceiling(frequency));

    let employee_contribution =
        round_half_up(capped_wages.saturating_mul(config.employee_rate), decimals);
    let employer_contribution = if employee_only {
        Decimal::ZERO
    } else {
        round_half_up(capped_wages.saturating_mul(config.employer_rate), decimals)
    };
    let total_contribution = employee_contribution.saturating_add(employer_contribution);

    debug!(
        %gross_wages,
        %capped_wages,
        %frequency,
        %employee_contribution,
        %employer_contribution,
        "calculated NIS"
    );

    NisResult {
        gross_wages,
        capped_wages,
        employee_contribution,
        employer_contribution,
        total_contribution,
        frequency,
    }
}
