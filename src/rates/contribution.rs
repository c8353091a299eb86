use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{PayFrequency, TaxError, ensure_rate};

/// NIS contribution rates and insurable-earnings ceilings for one fiscal year.
///
/// Deserialization runs [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContributionRateRepr")]
pub struct ContributionRateConfig {
    /// Employee share, as a fraction of capped wages.
    pub employee_rate: Decimal,
    /// Employer share, as a fraction of capped wages.
    pub employer_rate: Decimal,
    /// Maximum insurable earnings per week.
    pub weekly_ceiling: Decimal,
    /// Maximum insurable earnings per month.
    pub monthly_ceiling: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionRateRepr {
    employee_rate: Decimal,
    employer_rate: Decimal,
    weekly_ceiling: Decimal,
    monthly_ceiling: Decimal,
}

impl TryFrom<ContributionRateRepr> for ContributionRateConfig {
    type Error = TaxError;

    fn try_from(repr: ContributionRateRepr) -> Result<Self, Self::Error> {
        let config = Self {
            employee_rate: repr.employee_rate,
            employer_rate: repr.employer_rate,
            weekly_ceiling: repr.weekly_ceiling,
            monthly_ceiling: repr.monthly_ceiling,
        };
        config.validate()?;
        Ok(config)
    }
}

impl ContributionRateConfig {
    /// Insurable-earnings ceiling for the given pay frequency.
    pub fn ceiling(&self, frequency: PayFrequency) -> Decimal {
        match frequency {
            PayFrequency::Weekly => self.weekly_ceiling,
            PayFrequency::Monthly => self.monthly_ceiling,
        }
    }

    /// Combined employee + employer rate.
    pub fn combined_rate(&self) -> Decimal {
        self.employee_rate + self.employer_rate
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        ensure_rate("nis.employeeRate", self.employee_rate)?;
        ensure_rate("nis.employerRate", self.employer_rate)?;
        if self.weekly_ceiling < Decimal::ZERO || self.monthly_ceiling < Decimal::ZERO {
            return Err(TaxError::InvalidConfig(
                "NIS ceilings must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config() -> ContributionRateConfig {
        ContributionRateConfig {
            employee_rate: dec!(0.056),
            employer_rate: dec!(0.084),
            weekly_ceiling: dec!(64615),
            monthly_ceiling: dec!(280000),
        }
    }

    #[test]
    fn ceiling_by_frequency() {
        let c = config();
        assert_eq!(c.ceiling(PayFrequency::Weekly), dec!(64615));
        assert_eq!(c.ceiling(PayFrequency::Monthly), dec!(280000));
    }

    #[test]
    fn combined() {
        assert_eq!(config().combined_rate(), dec!(0.140));
    }

    #[test]
    fn negative_ceiling_rejected() {
        let mut c = config();
        c.weekly_ceiling = dec!(-1);
        assert!(matches!(c.validate(), Err(TaxError::InvalidConfig(_))));
    }

    #[test]
    fn rate_out_of_range_rejected() {
        let mut c = config();
        c.employer_rate = dec!(1.084);
        assert!(matches!(c.validate(), Err(TaxError::InvalidRate { .. })));
    }

    #[test]
    fn deserialize_validates() {
        let json = serde_json::to_value(config()).unwrap();
        let back: ContributionRateConfig = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, config());

        let mut bad = json;
        bad["employeeRate"] = serde_json::json!("3");
        assert!(serde_json::from_value::<ContributionRateConfig>(bad).is_err());
    }
}
