use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::brackets::{TaxBracket, TaxBracketTable};
use super::contribution::ContributionRateConfig;
use super::vat_config::VatCategoryConfig;
use crate::core::TaxError;

/// Highest supported currency precision.
const MAX_CURRENCY_DECIMALS: u32 = 6;

/// Every rate and threshold for one jurisdiction and fiscal year.
///
/// A table is never patched in place by the engine: switching years means
/// selecting a different table, so a calculation cannot mix rates from two
/// years.
///
/// Deserialization runs [`validate`](Self::validate). A table built as a
/// struct literal or changed field by field is checked again when handed to
/// [`TaxEngine::new`](crate::TaxEngine::new) or
/// [`RateRegistry::insert`](super::RateRegistry::insert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RateTableRepr")]
pub struct RateTable {
    pub fiscal_year: u16,
    /// ISO 3166-1 alpha-2 jurisdiction code (e.g. "GY").
    pub jurisdiction: String,
    /// ISO 4217 currency code (e.g. "GYD").
    pub currency_code: String,
    /// Decimal places every output amount is rounded to (0 for whole dollars).
    pub currency_decimals: u32,
    /// Monthly PAYE schedule.
    pub paye: TaxBracketTable,
    pub nis: ContributionRateConfig,
    pub vat: VatCategoryConfig,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateTableRepr {
    fiscal_year: u16,
    jurisdiction: String,
    currency_code: String,
    currency_decimals: u32,
    paye: TaxBracketTable,
    nis: ContributionRateConfig,
    vat: VatCategoryConfig,
}

impl TryFrom<RateTableRepr> for RateTable {
    type Error = TaxError;

    fn try_from(repr: RateTableRepr) -> Result<Self, Self::Error> {
        let table = Self {
            fiscal_year: repr.fiscal_year,
            jurisdiction: repr.jurisdiction,
            currency_code: repr.currency_code,
            currency_decimals: repr.currency_decimals,
            paye: repr.paye,
            nis: repr.nis,
            vat: repr.vat,
        };
        table.validate()?;
        Ok(table)
    }
}

impl RateTable {
    /// Guyana rates for fiscal year 2025.
    ///
    /// - PAYE (monthly): 0% up to 130,000, 25% to 260,000, 35% above
    /// - NIS: 5.6% employee, 8.4% employer, ceilings 64,615/week and 280,000/month
    /// - VAT: 14% standard, registration above 15,000,000 annual supplies
    pub fn guyana_2025() -> Self {
        Self {
            fiscal_year: 2025,
            jurisdiction: "GY".into(),
            currency_code: "GYD".into(),
            currency_decimals: 0,
            paye: TaxBracketTable::from_trusted(vec![
                TaxBracket::new(dec!(0), dec!(130_000), dec!(0)),
                TaxBracket::new(dec!(130_000), dec!(260_000), dec!(0.25)),
                TaxBracket::unbounded(dec!(260_000), dec!(0.35)),
            ]),
            nis: ContributionRateConfig {
                employee_rate: dec!(0.056),
                employer_rate: dec!(0.084),
                weekly_ceiling: dec!(64_615),
                monthly_ceiling: dec!(280_000),
            },
            vat: VatCategoryConfig {
                standard_rate: dec!(0.14),
                registration_threshold: dec!(15_000_000),
                zero_rated_categories: [
                    "AGRICULTURAL_INPUTS",
                    "BASIC_FOOD",
                    "EXPORTS",
                    "MEDICAL_SUPPLIES",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
                exempt_categories: [
                    "EDUCATION",
                    "FINANCIAL_SERVICES",
                    "MEDICAL_SERVICES",
                    "PUBLIC_TRANSPORT",
                    "RESIDENTIAL_RENTAL",
                ]
                .into_iter()
                .map(String::from)
                .collect(),
            },
        }
    }

    /// Check every component of the table.
    pub fn validate(&self) -> Result<(), TaxError> {
        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(TaxError::InvalidConfig(format!(
                "currency decimals {} exceed maximum of {MAX_CURRENCY_DECIMALS}",
                self.currency_decimals
            )));
        }
        if self.currency_code.len() != 3 {
            return Err(TaxError::InvalidConfig(format!(
                "currency code '{}' must have 3 letters",
                self.currency_code
            )));
        }
        self.nis.validate()?;
        self.vat.validate()?;
        Ok(())
    }

    /// Parse and validate a table from JSON. Validation failures surface as
    /// [`TaxError::Json`] carrying the validation message.
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use gytax::rates::RateTable;
    ///
    /// let json = serde_json::to_string(&RateTable::guyana_2025()).unwrap();
    /// let table = RateTable::from_json(&json).unwrap();
    /// assert_eq!(table.fiscal_year, 2025);
    /// # }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, TaxError> {
        let table = serde_json::from_str(json).inspect_err(|err| {
            warn!(error = %err, "rejected rate table JSON");
        })?;
        Ok(table)
    }

    /// Serialize the table to pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, TaxError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for custom rate tables (other fiscal years, what-if scenarios).
///
/// ```
/// use gytax::rates::*;
/// use rust_decimal_macros::dec;
///
/// let table = RateTableBuilder::new(2026)
///     .paye_brackets(vec![
///         TaxBracket::new(dec!(0), dec!(150000), dec!(0)),
///         TaxBracket::unbounded(dec!(150000), dec!(0.25)),
///     ])
///     .nis(ContributionRateConfig {
///         employee_rate: dec!(0.056),
///         employer_rate: dec!(0.084),
///         weekly_ceiling: dec!(70000),
///         monthly_ceiling: dec!(300000),
///     })
///     .vat_standard_rate(dec!(0.125))
///     .zero_rated("BASIC_FOOD")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.vat.standard_rate, dec!(0.125));
/// ```
pub struct RateTableBuilder {
    fiscal_year: u16,
    jurisdiction: String,
    currency_code: String,
    currency_decimals: u32,
    paye_brackets: Option<Vec<TaxBracket>>,
    nis: Option<ContributionRateConfig>,
    vat_standard_rate: Option<Decimal>,
    vat_registration_threshold: Decimal,
    zero_rated_categories: Vec<String>,
    exempt_categories: Vec<String>,
}

impl RateTableBuilder {
    pub fn new(fiscal_year: u16) -> Self {
        Self {
            fiscal_year,
            jurisdiction: "GY".into(),
            currency_code: "GYD".into(),
            currency_decimals: 0,
            paye_brackets: None,
            nis: None,
            vat_standard_rate: None,
            vat_registration_threshold: Decimal::ZERO,
            zero_rated_categories: Vec::new(),
            exempt_categories: Vec::new(),
        }
    }

    /// Start from an existing table, e.g. to derive next year's rates.
    pub fn from_table(table: &RateTable) -> Self {
        Self {
            fiscal_year: table.fiscal_year,
            jurisdiction: table.jurisdiction.clone(),
            currency_code: table.currency_code.clone(),
            currency_decimals: table.currency_decimals,
            paye_brackets: Some(table.paye.brackets().to_vec()),
            nis: Some(table.nis.clone()),
            vat_standard_rate: Some(table.vat.standard_rate),
            vat_registration_threshold: table.vat.registration_threshold,
            zero_rated_categories: table.vat.zero_rated_categories.iter().cloned().collect(),
            exempt_categories: table.vat.exempt_categories.iter().cloned().collect(),
        }
    }

    pub fn fiscal_year(mut self, year: u16) -> Self {
        self.fiscal_year = year;
        self
    }

    pub fn jurisdiction(mut self, code: impl Into<String>) -> Self {
        self.jurisdiction = code.into();
        self
    }

    pub fn currency(mut self, code: impl Into<String>, decimals: u32) -> Self {
        self.currency_code = code.into();
        self.currency_decimals = decimals;
        self
    }

    pub fn paye_brackets(mut self, brackets: Vec<TaxBracket>) -> Self {
        self.paye_brackets = Some(brackets);
        self
    }

    pub fn nis(mut self, config: ContributionRateConfig) -> Self {
        self.nis = Some(config);
        self
    }

    pub fn vat_standard_rate(mut self, rate: Decimal) -> Self {
        self.vat_standard_rate = Some(rate);
        self
    }

    pub fn vat_registration_threshold(mut self, threshold: Decimal) -> Self {
        self.vat_registration_threshold = threshold;
        self
    }

    pub fn zero_rated(mut self, category: impl Into<String>) -> Self {
        self.zero_rated_categories.push(category.into());
        self
    }

    pub fn exempt(mut self, category: impl Into<String>) -> Self {
        self.exempt_categories.push(category.into());
        self
    }

    /// Build and validate the table.
    pub fn build(self) -> Result<RateTable, TaxError> {
        let brackets = self
            .paye_brackets
            .ok_or_else(|| TaxError::InvalidConfig("PAYE brackets are required".into()))?;
        let nis = self
            .nis
            .ok_or_else(|| TaxError::InvalidConfig("NIS rates are required".into()))?;
        let standard_rate = self
            .vat_standard_rate
            .ok_or_else(|| TaxError::InvalidConfig("VAT standard rate is required".into()))?;

        let table = RateTable {
            fiscal_year: self.fiscal_year,
            jurisdiction: self.jurisdiction,
            currency_code: self.currency_code,
            currency_decimals: self.currency_decimals,
            paye: TaxBracketTable::new(brackets)?,
            nis,
            vat: VatCategoryConfig {
                standard_rate,
                registration_threshold: self.vat_registration_threshold,
                zero_rated_categories: self.zero_rated_categories.into_iter().collect(),
                exempt_categories: self.exempt_categories.into_iter().collect(),
            },
        };

        table.validate().inspect_err(|err| {
            warn!(fiscal_year = table.fiscal_year, error = %err, "rejected rate table");
        })?;
        Ok(table)
    }
}
