use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::TaxError;

/// A calendar quarter, e.g. 2025-Q2 (1 April to 30 June 2025).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "QuarterRepr", into = "QuarterRepr")]
pub struct TaxQuarter {
    year: i32,
    quarter: u32,
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct QuarterRepr {
    year: i32,
    quarter: u32,
}

impl TaxQuarter {
    /// Quarter `quarter` (1-4) of `year`.
    pub fn new(year: i32, quarter: u32) -> Result<Self, TaxError> {
        if !(1..=4).contains(&quarter) {
            return Err(TaxError::InvalidPeriod(format!(
                "quarter must be 1-4, got {quarter}"
            )));
        }
        let out_of_range = || TaxError::InvalidPeriod(format!("{year}-Q{quarter} is out of range"));

        let start = NaiveDate::from_ymd_opt(year, 3 * (quarter - 1) + 1, 1).ok_or_else(out_of_range)?;
        let next_start = if quarter == 4 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, 3 * quarter + 1, 1)
        };
        let end = next_start
            .and_then(|d| d.pred_opt())
            .ok_or_else(out_of_range)?;

        Ok(Self {
            year,
            quarter,
            start,
            end,
        })
    }

    /// The quarter a date falls in.
    pub fn containing(date: NaiveDate) -> Result<Self, TaxError> {
        Self::new(date.year(), date.month0() / 3 + 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    /// First day of the quarter.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the quarter (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for TaxQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

impl TryFrom<QuarterRepr> for TaxQuarter {
    type Error = TaxError;

    fn try_from(repr: QuarterRepr) -> Result<Self, Self::Error> {
        Self::new(repr.year, repr.quarter)
    }
}

impl From<TaxQuarter> for QuarterRepr {
    fn from(q: TaxQuarter) -> Self {
        Self {
            year: q.year,
            quarter: q.quarter,
        }
    }
}
