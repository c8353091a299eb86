#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

type RawAmount = (u32, u32, u32, u8);

/// Any non-negative Decimal, up to `Decimal::MAX`, at any scale.
fn amount((lo, mid, hi, scale): RawAmount) -> Decimal {
    Decimal::from_parts(lo, mid, hi, false, u32::from(scale % 29))
}

fuzz_target!(|input: (RawAmount, [RawAmount; 4], RawAmount)| {
    let (gross, [personal, dependent, pension, insurance], vat_amount) = input;
    let engine = gytax::TaxEngine::for_year(2025).expect("built-in year");

    let allowances = gytax::Allowances::new()
        .personal(amount(personal))
        .dependent(amount(dependent))
        .pension(amount(pension))
        .insurance(amount(insurance));
    let pay = engine.payroll(amount(gross), &allowances);
    assert_eq!(
        pay.net_pay,
        gytax::round_half_up(pay.gross_salary - pay.total_deductions, 0)
    );
    assert!(pay.paye.taxable_income >= Decimal::ZERO);
    assert!(pay.employer_costs.total >= pay.gross_salary);

    let request = gytax::VatRequest::new(amount(vat_amount));
    let exclusive = engine.vat(&request);
    assert!(exclusive.net_amount <= exclusive.gross_amount);
    let inclusive = engine.vat(&request.inclusive());
    assert!(inclusive.net_amount <= inclusive.gross_amount);
});
