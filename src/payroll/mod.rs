//! Per-employee payroll: PAYE and NIS on the same gross salary.
//!
//! PAYE and NIS are computed independently and only combined here, so each
//! keeps its own rounding. NIS uses the monthly ceiling, matching the monthly
//! PAYE schedule. Sums saturate at [`Decimal::MAX`].
//!
//! # Example
//!
//! ```
//! use gytax::paye::Allowances;
//! use gytax::payroll::calculate_payroll;
//! use gytax::rates::RateTable;
//! use rust_decimal_macros::dec;
//!
//! let table = RateTable::guyana_2025();
//! let pay = calculate_payroll(&table, dec!(300000), &Allowances::default());
//!
//! assert_eq!(pay.total_deductions, dec!(46500) + dec!(15680));
//! assert_eq!(pay.net_pay, dec!(237820));
//! assert_eq!(pay.employer_costs.total, dec!(323520));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PayFrequency, round_half_up};
use crate::nis::{NisResult, calculate_nis};
use crate::paye::{Allowances, PayeResult, calculate_paye};
use crate::rates::RateTable;

/// What the employer pays on top of, and including, the salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerCosts {
    pub salary: Decimal,
    /// Employer NIS share.
    pub nis_contribution: Decimal,
    /// `salary + nis_contribution`.
    pub total: Decimal,
}

/// PAYE and NIS combined for one employee and pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    pub gross_salary: Decimal,
    pub paye: PayeResult,
    pub nis: NisResult,
    /// `paye.paye_tax + nis.employee_contribution`.
    pub total_deductions: Decimal,
    /// `gross_salary - total_deductions`.
    pub net_pay: Decimal,
    pub employer_costs: EmployerCosts,
}

/// Calculate payroll for one employee.
pub fn calculate_payroll(
    rates: &RateTable,
    gross_salary: Decimal,
    allowances: &Allowances,
) -> PayrollResult {
    let decimals = rates.currency_decimals;
    let paye = calculate_paye(&rates.paye, gross_salary, allowances, decimals);
    let nis = calculate_nis(&rates.nis, gross_salary, PayFrequency::Monthly, false, decimals);

    let total_deductions = paye.paye_tax.saturating_add(nis.employee_contribution);
    let net_pay = round_half_up(gross_salary.saturating_sub(total_deductions), decimals);
    let employer_costs = EmployerCosts {
        salary: gross_salary,
        nis_contribution: nis.employer_contribution,
        total: gross_salary.saturating_add(nis.employer_contribution),
    };

    debug!(%gross_salary, %total_deductions, %net_pay, "calculated payroll");

    PayrollResult {
        gross_salary,
        paye,
        nis,
        total_deductions,
        net_pay,
        employer_costs,
    }
}

/// Payroll input for one employee of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePay {
    pub employee_id: String,
    pub gross_salary: Decimal,
    #[serde(default)]
    pub allowances: Allowances,
}

impl EmployeePay {
    pub fn new(employee_id: impl Into<String>, gross_salary: Decimal) -> Self {
        Self {
            employee_id: employee_id.into(),
            gross_salary,
            allowances: Allowances::default(),
        }
    }

    pub fn allowances(mut self, allowances: Allowances) -> Self {
        self.allowances = allowances;
        self
    }
}

/// One employee's line in a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    pub employee_id: String,
    pub payroll: PayrollResult,
}

/// Sums over a set of payroll results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    pub employee_count: usize,
    pub gross_salaries: Decimal,
    pub paye_tax: Decimal,
    pub nis_employee: Decimal,
    pub nis_employer: Decimal,
    /// `nis_employee + nis_employer`.
    pub nis_total: Decimal,
    pub net_pay: Decimal,
    pub employer_cost: Decimal,
}

impl PayrollTotals {
    /// Reduce payroll results into totals. An empty input gives all zeros.
    /// Each sum saturates at [`Decimal::MAX`].
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a PayrollResult>) -> Self {
        results.into_iter().fold(Self::default(), |mut acc, r| {
            acc.employee_count += 1;
            acc.gross_salaries = acc.gross_salaries.saturating_add(r.gross_salary);
            acc.paye_tax = acc.paye_tax.saturating_add(r.paye.paye_tax);
            acc.nis_employee = acc.nis_employee.saturating_add(r.nis.employee_contribution);
            acc.nis_employer = acc.nis_employer.saturating_add(r.nis.employer_contribution);
            acc.nis_total = acc.nis_total.saturating_add(r.nis.total_contribution);
            acc.net_pay = acc.net_pay.saturating_add(r.net_pay);
            acc.employer_cost = acc.employer_cost.saturating_add(r.employer_costs.total);
            acc
        })
    }
}

/// A batch payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub entries: Vec<PayrollEntry>,
    pub totals: PayrollTotals,
}

/// Calculate payroll for every employee and total the run.
pub fn run_payroll(rates: &RateTable, employees: &[EmployeePay]) -> PayrollSummary {
    let entries: Vec<PayrollEntry> = employees
        .iter()
        .map(|e| PayrollEntry {
            employee_id: e.employee_id.clone(),
            payroll: calculate_payroll(rates, e.gross_salary, &e.allowances),
        })
        .collect();
    let totals = PayrollTotals::from_results(entries.iter().map(|e| &e.payroll));

    debug!(
        employees = totals.employee_count,
        gross = %totals.gross_salaries,
        paye = %totals.paye_tax,
        "ran payroll"
    );

    PayrollSummary { entries, totals }
}
