use rust_decimal::{Decimal, RoundingStrategy};

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
///
/// Every output amount of the engine goes through this function exactly once.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `max(0, value)`.
pub(crate) fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
