//! Engine facade bound to one rate table.

use rust_decimal::Decimal;

use crate::core::{PayFrequency, TaxError};
use crate::nis::{NisResult, calculate_nis};
use crate::paye::{Allowances, PayeResult, calculate_paye};
use crate::payroll::{EmployeePay, PayrollResult, PayrollSummary, calculate_payroll, run_payroll};
use crate::rates::{RateRegistry, RateTable};
use crate::vat::{
    VatRegistrationStatus, VatRequest, VatResult, calculate_vat, check_vat_registration,
};

#[cfg(feature = "compliance")]
use crate::compliance::{
    CorporateTaxPolicy, GraFormData, QuarterlyTaxInput, QuarterlyTaxResult, TaxQuarter,
    calculate_quarterly_tax, generate_gra_tax_form_data,
};

/// Every calculation of the crate, using one fiscal year's rates.
///
/// The engine owns its [`RateTable`] and never changes it. The table is
/// validated on the way in, so every rate the engine applies lies in [0, 1].
/// It is `Send + Sync` and can be shared between threads freely.
///
/// ```
/// use gytax::{Allowances, PayFrequency, TaxEngine, VatRequest};
/// use rust_decimal_macros::dec;
///
/// let engine = TaxEngine::for_year(2025).unwrap();
///
/// let paye = engine.paye(dec!(300000), &Allowances::default());
/// assert_eq!(paye.paye_tax, dec!(46500));
///
/// let nis = engine.nis(dec!(500000), PayFrequency::Monthly, false);
/// assert_eq!(nis.employee_contribution, dec!(15680));
///
/// let vat = engine.vat(&VatRequest::new(dec!(1000)));
/// assert_eq!(vat.gross_amount, dec!(1140));
/// ```
#[derive(Debug, Clone)]
pub struct TaxEngine {
    rates: RateTable,
}

impl TaxEngine {
    /// Validate `rates` and bind an engine to them.
    pub fn new(rates: RateTable) -> Result<Self, TaxError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Engine for a built-in fiscal year.
    pub fn for_year(fiscal_year: u16) -> Result<Self, TaxError> {
        Self::from_registry(&RateRegistry::builtin(), fiscal_year)
    }

    /// Engine for a fiscal year selected from `registry`.
    pub fn from_registry(registry: &RateRegistry, fiscal_year: u16) -> Result<Self, TaxError> {
        // registered tables are validated on insert
        Ok(Self {
            rates: registry.get(fiscal_year)?.clone(),
        })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    fn decimals(&self) -> u32 {
        self.rates.currency_decimals
    }

    pub fn paye(&self, gross_salary: Decimal, allowances: &Allowances) -> PayeResult {
        calculate_paye(&self.rates.paye, gross_salary, allowances, self.decimals())
    }

    pub fn nis(&self, gross_wages: Decimal, frequency: PayFrequency, employee_only: bool) -> NisResult {
        calculate_nis(
            &self.rates.nis,
            gross_wages,
            frequency,
            employee_only,
            self.decimals(),
        )
    }

    pub fn vat(&self, request: &VatRequest) -> VatResult {
        calculate_vat(&self.rates.vat, request, self.decimals())
    }

    pub fn vat_registration(&self, annual_taxable_supplies: Decimal) -> VatRegistrationStatus {
        check_vat_registration(&self.rates.vat, annual_taxable_supplies)
    }

    pub fn payroll(&self, gross_salary: Decimal, allowances: &Allowances) -> PayrollResult {
        calculate_payroll(&self.rates, gross_salary, allowances)
    }

    pub fn run_payroll(&self, employees: &[EmployeePay]) -> PayrollSummary {
        run_payroll(&self.rates, employees)
    }

    #[cfg(feature = "compliance")]
    pub fn quarterly_tax(
        &self,
        period: TaxQuarter,
        input: &QuarterlyTaxInput,
        policy: &dyn CorporateTaxPolicy,
    ) -> QuarterlyTaxResult {
        calculate_quarterly_tax(period, input, policy, self.decimals())
    }

    #[cfg(feature = "compliance")]
    pub fn gra_form_data(
        &self,
        period: TaxQuarter,
        payrolls: &[PayrollResult],
        vat_results: &[VatResult],
    ) -> GraFormData {
        generate_gra_tax_form_data(period, payrolls, vat_results)
    }
}

impl TryFrom<RateTable> for TaxEngine {
    type Error = TaxError;

    fn try_from(rates: RateTable) -> Result<Self, Self::Error> {
        Self::new(rates)
    }
}
