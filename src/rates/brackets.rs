use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{TaxError, ensure_rate};

/// One band of a progressive income-tax schedule.
///
/// Income strictly above `min` and up to `max` is taxed at `rate`.
/// `max == None` marks the unbounded top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// A bounded band `(min, max]`.
    pub fn new(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// The open-ended top band starting at `min`.
    pub fn unbounded(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }

    /// Width of the band, `None` for the top band.
    pub fn span(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }

    /// Human-readable band label, e.g. `"130000-260000"` or `"260000+"`.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}

/// Validated, ordered PAYE bracket schedule.
///
/// Invariants checked on construction (and on deserialization):
/// - at least one bracket, the first starting at 0
/// - each bounded bracket has `max > min` and `max == next.min`
/// - only the last bracket is unbounded
/// - rates lie in [0, 1] and never decrease
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, TaxError> {
        validate_brackets(&brackets)?;
        Ok(Self { brackets })
    }

    /// Wrap brackets already known to be valid.
    pub(crate) fn from_trusted(brackets: Vec<TaxBracket>) -> Self {
        debug_assert!(validate_brackets(&brackets).is_ok());
        Self { brackets }
    }

    /// Brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxBracket> {
        self.brackets.iter()
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Marginal rate applying to the next unit of `taxable_income`.
    ///
    /// An income sitting exactly on a boundary is still in the lower band.
    pub fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        self.brackets
            .iter()
            .take_while(|b| taxable_income > b.min)
            .last()
            .or_else(|| self.brackets.first())
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxBracketTable {
    type Error = TaxError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<TaxBracketTable> for Vec<TaxBracket> {
    fn from(table: TaxBracketTable) -> Self {
        table.brackets
    }
}

impl<'a> IntoIterator for &'a TaxBracketTable {
    type Item = &'a TaxBracket;
    type IntoIter = std::slice::Iter<'a, TaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.brackets.iter()
    }
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), TaxError> {
    let Some(first) = brackets.first() else {
        return Err(TaxError::InvalidBracketTable(
            "at least one bracket is required".into(),
        ));
    };
    if first.min != Decimal::ZERO {
        return Err(TaxError::InvalidBracketTable(format!(
            "first bracket must start at 0, starts at {}",
            first.min
        )));
    }

    let last_idx = brackets.len() - 1;
    for (i, bracket) in brackets.iter().enumerate() {
        ensure_rate(&format!("paye[{i}].rate"), bracket.rate)?;

        match (bracket.max, brackets.get(i + 1)) {
            (Some(max), Some(next)) => {
                if max <= bracket.min {
                    return Err(TaxError::InvalidBracketTable(format!(
                        "bracket {i}: max {max} must be greater than min {}",
                        bracket.min
                    )));
                }
                if next.min != max {
                    return Err(TaxError::InvalidBracketTable(format!(
                        "bracket {}: min {} does not continue from previous max {max}",
                        i + 1,
                        next.min
                    )));
                }
                if next.rate < bracket.rate {
                    return Err(TaxError::InvalidBracketTable(format!(
                        "bracket {}: rate {} is lower than previous rate {}",
                        i + 1,
                        next.rate,
                        bracket.rate
                    )));
                }
            }
            (None, Some(_)) => {
                return Err(TaxError::InvalidBracketTable(format!(
                    "bracket {i} is unbounded but is not the last bracket"
                )));
            }
            (Some(_), None) => {
                return Err(TaxError::InvalidBracketTable(format!(
                    "last bracket {last_idx} must be unbounded"
                )));
            }
            (None, None) => {}
        }
    }

    Ok(())
}
