use std::collections::BTreeMap;

use tracing::warn;

use super::table::RateTable;
use crate::core::TaxError;

/// Rate tables for several fiscal years, side by side.
///
/// The caller picks the year for each calculation; nothing in the crate
/// consults a "current" table implicitly.
#[derive(Debug, Clone, Default)]
pub struct RateRegistry {
    tables: BTreeMap<u16, RateTable>,
}

impl RateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every table shipped with the crate.
    pub fn builtin() -> Self {
        let builtin = RateTable::guyana_2025();
        Self {
            tables: BTreeMap::from([(builtin.fiscal_year, builtin)]),
        }
    }

    /// Validate and register a table, replacing (and returning) any table for
    /// the same year. Every registered table has passed
    /// [`RateTable::validate`].
    pub fn insert(&mut self, table: RateTable) -> Result<Option<RateTable>, TaxError> {
        table.validate().inspect_err(|err| {
            warn!(fiscal_year = table.fiscal_year, error = %err, "rejected rate table");
        })?;
        Ok(self.tables.insert(table.fiscal_year, table))
    }

    pub fn get(&self, fiscal_year: u16) -> Result<&RateTable, TaxError> {
        self.tables.get(&fiscal_year).ok_or_else(|| {
            warn!(fiscal_year, "no rate table registered");
            TaxError::UnknownFiscalYear(fiscal_year)
        })
    }

    /// Table for the most recent registered year.
    pub fn latest(&self) -> Option<&RateTable> {
        self.tables.values().next_back()
    }

    /// Registered fiscal years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
