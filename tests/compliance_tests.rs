//! Quarterly estimates and GRA return figures.

#![cfg(feature = "compliance")]

use chrono::NaiveDate;
use gytax::compliance::*;
use gytax::paye::Allowances;
use gytax::payroll::calculate_payroll;
use gytax::rates::RateTable;
use gytax::vat::{VatRequest, calculate_vat};
use gytax::{TaxEngine, TaxError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn q(year: i32, quarter: u32) -> TaxQuarter {
    TaxQuarter::new(year, quarter).unwrap()
}

// ---------------------------------------------------------------------------
// Periods
// ---------------------------------------------------------------------------

#[test]
fn quarter_bounds() {
    let q1 = q(2025, 1);
    assert_eq!(q1.start(), date(2025, 1, 1));
    assert_eq!(q1.end(), date(2025, 3, 31));

    let q4 = q(2025, 4);
    assert_eq!(q4.start(), date(2025, 10, 1));
    assert_eq!(q4.end(), date(2025, 12, 31));
}

#[test]
fn leap_year_february_is_in_q1() {
    let q1 = q(2024, 1);
    assert!(q1.contains(date(2024, 2, 29)));
    assert!(!q1.contains(date(2024, 4, 1)));
}

#[test]
fn quarter_from_date() {
    assert_eq!(TaxQuarter::containing(date(2025, 8, 14)).unwrap(), q(2025, 3));
    assert_eq!(TaxQuarter::containing(date(2025, 12, 31)).unwrap(), q(2025, 4));
}

#[test]
fn quarter_out_of_range() {
    assert!(matches!(TaxQuarter::new(2025, 0), Err(TaxError::InvalidPeriod(_))));
    assert!(matches!(TaxQuarter::new(2025, 5), Err(TaxError::InvalidPeriod(_))));
}

#[test]
fn quarter_json_is_year_and_number() {
    let json = serde_json::to_string(&q(2025, 2)).unwrap();
    assert_eq!(json, r#"{"year":2025,"quarter":2}"#);
    let back: TaxQuarter = serde_json::from_str(&json).unwrap();
    assert_eq!(back.end(), date(2025, 6, 30));

    assert!(serde_json::from_str::<TaxQuarter>(r#"{"year":2025,"quarter":7}"#).is_err());
}

// ---------------------------------------------------------------------------
// Quarterly tax
// ---------------------------------------------------------------------------

#[test]
fn profitable_quarter_with_vat_due() {
    let input = QuarterlyTaxInput::new(dec!(8_000_000), dec!(5_000_000))
        .vat(dec!(1_120_000), dec!(420_000));
    let r = calculate_quarterly_tax(q(2025, 2), &input, &SimplifiedCorporateRate::default(), 0);

    assert_eq!(r.taxable_profit, dec!(3_000_000));
    assert_eq!(r.corporate_tax_rate, dec!(0.30));
    assert_eq!(r.corporate_tax, dec!(900_000));
    assert_eq!(r.vat_payable, dec!(700_000));
    assert_eq!(r.vat_credit, dec!(0));
    assert_eq!(r.total_tax_liability, dec!(1_600_000));
}

#[test]
fn excess_input_vat_is_a_credit_not_a_reduction() {
    let input = QuarterlyTaxInput::new(dec!(2_000_000), dec!(1_000_000))
        .vat(dec!(100_000), dec!(250_000));
    let r = calculate_quarterly_tax(q(2025, 1), &input, &SimplifiedCorporateRate::default(), 0);

    assert_eq!(r.corporate_tax, dec!(250_000));
    assert_eq!(r.vat_payable, dec!(0));
    assert_eq!(r.vat_credit, dec!(150_000));
    assert_eq!(r.total_tax_liability, dec!(250_000));
}

#[test]
fn loss_making_quarter() {
    let input = QuarterlyTaxInput::new(dec!(500_000), dec!(900_000));
    let r = calculate_quarterly_tax(q(2025, 3), &input, &SimplifiedCorporateRate::default(), 0);
    assert_eq!(r.taxable_profit, dec!(0));
    assert_eq!(r.corporate_tax, dec!(0));
    assert_eq!(r.total_tax_liability, dec!(0));
}

#[test]
fn flat_policy() {
    let input = QuarterlyTaxInput::new(dec!(10_000_000), dec!(4_000_000));
    let r = calculate_quarterly_tax(q(2025, 4), &input, &FlatCorporateRate(dec!(0.40)), 0);
    assert_eq!(r.corporate_tax_rate, dec!(0.40));
    assert_eq!(r.corporate_tax, dec!(2_400_000));
}

struct ProfitBands;

impl CorporateTaxPolicy for ProfitBands {
    fn rate(&self, _revenue: Decimal, taxable_profit: Decimal) -> Decimal {
        if taxable_profit > dec!(1_000_000) {
            dec!(0.27)
        } else {
            dec!(0.20)
        }
    }

    fn name(&self) -> &'static str {
        "profit-bands"
    }
}

#[test]
fn caller_supplied_policy() {
    let small = QuarterlyTaxInput::new(dec!(1_500_000), dec!(1_000_000));
    let large = QuarterlyTaxInput::new(dec!(3_000_000), dec!(1_000_000));
    assert_eq!(
        calculate_quarterly_tax(q(2025, 1), &small, &ProfitBands, 0).corporate_tax,
        dec!(100_000)
    );
    assert_eq!(
        calculate_quarterly_tax(q(2025, 1), &large, &ProfitBands, 0).corporate_tax,
        dec!(540_000)
    );
}

#[test]
fn vat_taken_from_calculated_transactions() {
    let table = RateTable::guyana_2025();
    let sales = [
        calculate_vat(&table.vat, &VatRequest::new(dec!(1_000_000)), 0),
        calculate_vat(&table.vat, &VatRequest::new(dec!(500_000)).export(), 0),
    ];
    let purchases = [calculate_vat(&table.vat, &VatRequest::new(dec!(400_000)), 0)];

    let input = QuarterlyTaxInput::new(dec!(1_500_000), dec!(400_000))
        .vat_from_results(&sales, &purchases);
    assert_eq!(input.vat_collected, dec!(140_000));
    assert_eq!(input.vat_paid, dec!(56_000));

    let r = calculate_quarterly_tax(q(2025, 1), &input, &SimplifiedCorporateRate::default(), 0);
    assert_eq!(r.vat_payable, dec!(84_000));
}

// ---------------------------------------------------------------------------
// GRA form data
// ---------------------------------------------------------------------------

#[test]
fn form_data_for_a_small_business() {
    let engine = TaxEngine::for_year(2025).unwrap();
    let payrolls = [
        engine.payroll(dec!(300000), &Allowances::default()),
        engine.payroll(dec!(100000), &Allowances::default()),
    ];
    let sales = [
        engine.vat(&VatRequest::new(dec!(10000))),
        engine.vat(&VatRequest::new(dec!(4000)).category("BASIC_FOOD")),
        engine.vat(&VatRequest::new(dec!(6000)).category("EDUCATION")),
    ];

    let form = engine.gra_form_data(q(2025, 3), &payrolls, &sales);

    assert_eq!(form.period.to_string(), "2025-Q3");
    assert_eq!(form.payroll.employee_count, 2);
    assert_eq!(form.payroll.paye_tax, dec!(46500));
    assert_eq!(form.payroll.nis_employee, dec!(21280));
    assert_eq!(form.payroll.nis_employer, dec!(31920));
    assert_eq!(form.payroll.nis_total, dec!(53200));

    assert_eq!(form.vat.transaction_count, 3);
    assert_eq!(form.vat.standard_rated_sales, dec!(10000));
    assert_eq!(form.vat.zero_rated_sales, dec!(4000));
    assert_eq!(form.vat.exempt_sales, dec!(6000));
    assert_eq!(form.vat.total_vat, dec!(1400));
    assert_eq!(form.vat.total_gross, dec!(21400));
}

#[test]
fn form_totals_match_individual_results() {
    let table = RateTable::guyana_2025();
    let payrolls: Vec<_> = [dec!(150000), dec!(275000), dec!(410000)]
        .into_iter()
        .map(|g| calculate_payroll(&table, g, &Allowances::default()))
        .collect();
    let form = generate_gra_tax_form_data(q(2025, 1), &payrolls, &[]);

    let paye: Decimal = payrolls.iter().map(|p| p.paye.paye_tax).sum();
    let net: Decimal = payrolls.iter().map(|p| p.net_pay).sum();
    assert_eq!(form.payroll.paye_tax, paye);
    assert_eq!(form.payroll.net_pay, net);
}
