use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxError;

/// How often wages are paid. Selects the NIS earnings ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Weekly pay period.
    Weekly,
    /// Monthly pay period.
    Monthly,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayFrequency {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(TaxError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known() {
        assert_eq!("weekly".parse::<PayFrequency>().unwrap(), PayFrequency::Weekly);
        assert_eq!(" Monthly ".parse::<PayFrequency>().unwrap(), PayFrequency::Monthly);
    }

    #[test]
    fn parse_unknown() {
        let err = "fortnightly".parse::<PayFrequency>().unwrap_err();
        assert!(matches!(err, TaxError::UnknownFrequency(ref s) if s == "fortnightly"));
    }

    #[test]
    fn display_round_trips() {
        for f in [PayFrequency::Weekly, PayFrequency::Monthly] {
            assert_eq!(f.to_string().parse::<PayFrequency>().unwrap(), f);
        }
    }
}
