use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised at the configuration boundary of the engine.
///
/// The calculations themselves never fail for in-domain inputs; everything
/// here is about building, selecting or parsing rate configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaxError {
    /// A PAYE bracket table is empty, non-contiguous, or otherwise malformed.
    #[error("invalid bracket table: {0}")]
    InvalidBracketTable(String),

    /// A rate lies outside the closed interval [0, 1].
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidRate {
        /// Dot-separated path of the offending field (e.g. "nis.employeeRate").
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// Any other inconsistent rate-table setting.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No rate table is registered for the requested fiscal year.
    #[error("no rate table registered for fiscal year {0}")]
    UnknownFiscalYear(u16),

    /// A tax period that does not exist (e.g. quarter 5).
    #[error("invalid tax period: {0}")]
    InvalidPeriod(String),

    /// A pay frequency string was neither "weekly" nor "monthly".
    #[error("unknown pay frequency '{0}'")]
    UnknownFrequency(String),

    /// Rate table JSON could not be parsed.
    #[cfg(feature = "json")]
    #[error("rate table JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaxError {
    pub(crate) fn invalid_rate(field: impl Into<String>, value: Decimal) -> Self {
        Self::InvalidRate {
            field: field.into(),
            value,
        }
    }
}

/// Check that `value` is a fraction in [0, 1].
pub(crate) fn ensure_rate(field: &str, value: Decimal) -> Result<(), TaxError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(TaxError::invalid_rate(field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rate_bounds_are_inclusive() {
        assert!(ensure_rate("r", dec!(0)).is_ok());
        assert!(ensure_rate("r", dec!(1)).is_ok());
        assert!(ensure_rate("r", dec!(-0.01)).is_err());
        assert!(ensure_rate("r", dec!(1.01)).is_err());
    }

    #[test]
    fn invalid_rate_message_names_field() {
        let err = ensure_rate("nis.employeeRate", dec!(1.5)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "nis.employeeRate must be between 0 and 1, got 1.5"
        );
    }
}
