#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs. A table that loads must be usable.
        if let Ok(table) = gytax::rates::RateTable::from_json(s) {
            let engine = gytax::TaxEngine::new(table).expect("loaded tables are validated");
            let _ = engine.payroll(rust_decimal::Decimal::from(300_000), &Default::default());
        }
    }
});
