//! Shared building blocks: the crate error type, rounding policy and pay
//! frequency.

mod error;
mod frequency;
mod rounding;

pub use error::TaxError;
pub use frequency::PayFrequency;
pub use rounding::round_half_up;

pub(crate) use error::ensure_rate;
pub(crate) use rounding::clamp_non_negative;
