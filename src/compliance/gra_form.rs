use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::period::TaxQuarter;
use crate::payroll::{PayrollResult, PayrollTotals};
use crate::rates::VatTreatment;
use crate::vat::VatResult;

/// VAT figures summed over many transactions, split by treatment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatTotals {
    pub transaction_count: usize,
    /// Net value of standard-rated supplies.
    pub standard_rated_sales: Decimal,
    /// Net value of zero-rated supplies (including exports).
    pub zero_rated_sales: Decimal,
    /// Net value of exempt supplies.
    pub exempt_sales: Decimal,
    pub total_net: Decimal,
    pub total_vat: Decimal,
    pub total_gross: Decimal,
}

impl VatTotals {
    /// Reduce VAT results into totals. An empty input gives all zeros.
    /// Each sum saturates at [`Decimal::MAX`].
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a VatResult>) -> Self {
        results.into_iter().fold(Self::default(), |mut acc, r| {
            acc.transaction_count += 1;
            let bucket = match r.treatment() {
                VatTreatment::StandardRated => &mut acc.standard_rated_sales,
                VatTreatment::ZeroRated => &mut acc.zero_rated_sales,
                VatTreatment::Exempt => &mut acc.exempt_sales,
            };
            *bucket = bucket.saturating_add(r.net_amount);
            acc.total_net = acc.total_net.saturating_add(r.net_amount);
            acc.total_vat = acc.total_vat.saturating_add(r.vat_amount);
            acc.total_gross = acc.total_gross.saturating_add(r.gross_amount);
            acc
        })
    }
}

/// Figures for the GRA PAYE/NIS and VAT returns of one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraFormData {
    pub period: TaxQuarter,
    pub payroll: PayrollTotals,
    pub vat: VatTotals,
}

/// Sum payroll and VAT results for a period's returns.
pub fn generate_gra_tax_form_data(
    period: TaxQuarter,
    payrolls: &[PayrollResult],
    vat_results: &[VatResult],
) -> GraFormData {
    let payroll = PayrollTotals::from_results(payrolls);
    let vat = VatTotals::from_results(vat_results);

    debug!(
        %period,
        employees = payroll.employee_count,
        transactions = vat.transaction_count,
        "generated GRA form data"
    );

    GraFormData {
        period,
        payroll,
        vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paye::Allowances;
    use crate::payroll::calculate_payroll;
    use crate::rates::RateTable;
    use crate::vat::{VatRequest, calculate_vat};
    use rust_decimal_macros::dec;

    #[test]
    fn empty_inputs_give_zeros() {
        let q = TaxQuarter::new(2025, 2).unwrap();
        let form = generate_gra_tax_form_data(q, &[], &[]);
        assert_eq!(form.payroll, PayrollTotals::default());
        assert_eq!(form.vat, VatTotals::default());
        assert_eq!(form.period, q);
    }

    #[test]
    fn sums_by_treatment() {
        let table = RateTable::guyana_2025();
        let sales = [
            calculate_vat(&table.vat, &VatRequest::new(dec!(1000)), 0),
            calculate_vat(&table.vat, &VatRequest::new(dec!(2000)).export(), 0),
            calculate_vat(&table.vat, &VatRequest::new(dec!(500)).category("EDUCATION"), 0),
            calculate_vat(&table.vat, &VatRequest::new(dec!(1140)).inclusive(), 0),
        ];
        let totals = VatTotals::from_results(&sales);
        assert_eq!(totals.transaction_count, 4);
        assert_eq!(totals.standard_rated_sales, dec!(2000));
        assert_eq!(totals.zero_rated_sales, dec!(2000));
        assert_eq!(totals.exempt_sales, dec!(500));
        assert_eq!(totals.total_net, dec!(4500));
        assert_eq!(totals.total_vat, dec!(280));
        assert_eq!(totals.total_gross, dec!(4780));
    }

    #[test]
    fn vat_sums_saturate() {
        let table = RateTable::guyana_2025();
        let big = calculate_vat(&table.vat, &VatRequest::new(Decimal::MAX).export(), 0);
        let totals = VatTotals::from_results([&big, &big]);
        assert_eq!(totals.zero_rated_sales, Decimal::MAX);
        assert_eq!(totals.total_gross, Decimal::MAX);
        assert_eq!(totals.total_vat, dec!(0));
    }

    #[test]
    fn payroll_section() {
        let table = RateTable::guyana_2025();
        let payrolls = [
            calculate_payroll(&table, dec!(300000), &Allowances::default()),
            calculate_payroll(&table, dec!(500000), &Allowances::default()),
        ];
        let form = generate_gra_tax_form_data(TaxQuarter::new(2025, 1).unwrap(), &payrolls, &[]);
        assert_eq!(form.payroll.employee_count, 2);
        assert_eq!(form.payroll.gross_salaries, dec!(800000));
        // 500000: 32500 + 240000 * 0.35 = 116500
        assert_eq!(form.payroll.paye_tax, dec!(46500) + dec!(116500));
        assert_eq!(form.payroll.nis_employee, dec!(31360));
        assert_eq!(form.payroll.nis_employer, dec!(47040));
    }
}
