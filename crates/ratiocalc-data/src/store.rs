//! Period-indexed statement storage.

use crate::error::Result;
use crate::market::MarketInfo;
use crate::period::Period;
use crate::source::{Fundamentals, StatementTable};
use crate::statement::{PeriodSnapshot, StatementKind, StatementRecord};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Read-only statements for one ticker, indexed by fiscal period.
///
/// Built once per analysis, either with [`StatementStore::builder`] or from a
/// provider payload with [`StatementStore::from_fundamentals`]. Any period
/// reported by at least one statement is kept, so a period missing a
/// statement can still serve as the prior period of its successor.
#[derive(Debug, Clone, Default)]
pub struct StatementStore {
    ticker: String,
    snapshots: BTreeMap<Period, PeriodSnapshot>,
    info: MarketInfo,
}

impl StatementStore {
    /// Start building a store.
    pub fn builder() -> StatementStoreBuilder {
        StatementStoreBuilder::default()
    }

    /// An empty store for `ticker`.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    /// Build a store from a provider payload.
    ///
    /// Columns whose label is not a date are skipped with a warning; the
    /// remaining columns are kept.
    pub fn from_fundamentals(fundamentals: &Fundamentals) -> Self {
        let mut builder = Self::payload_builder(fundamentals);
        for (kind, table) in fundamentals.statements() {
            builder = builder.table(kind, table);
        }

        builder.build()
    }

    /// Build a store from a provider payload, rejecting bad column labels.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidPeriod`](crate::DataError::InvalidPeriod)
    /// if any statement column label is not a date.
    pub fn try_from_fundamentals(fundamentals: &Fundamentals) -> Result<Self> {
        let mut builder = Self::payload_builder(fundamentals);
        for (kind, table) in fundamentals.statements() {
            builder = builder.try_table(kind, table)?;
        }

        Ok(builder.build())
    }

    fn payload_builder(fundamentals: &Fundamentals) -> StatementStoreBuilder {
        Self::builder()
            .ticker(fundamentals.ticker.clone())
            .info(fundamentals.info.clone())
    }

    /// Ticker the statements belong to.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Point-in-time market info.
    pub const fn info(&self) -> &MarketInfo {
        &self.info
    }

    /// Snapshot for a period.
    pub fn snapshot(&self, period: &Period) -> Option<&PeriodSnapshot> {
        self.snapshots.get(period)
    }

    /// All periods, oldest first.
    pub fn periods(&self) -> Vec<Period> {
        self.snapshots.keys().copied().collect()
    }

    /// Whether a period is present.
    pub fn contains(&self, period: &Period) -> bool {
        self.snapshots.contains_key(period)
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the store has no periods.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate over periods and snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&Period, &PeriodSnapshot)> {
        self.snapshots.iter()
    }
}

/// Builder for [`StatementStore`].
#[derive(Debug, Default)]
pub struct StatementStoreBuilder {
    ticker: String,
    snapshots: BTreeMap<Period, PeriodSnapshot>,
    info: MarketInfo,
}

impl StatementStoreBuilder {
    /// Set the ticker.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    /// Set the market info mapping.
    pub fn info(mut self, info: MarketInfo) -> Self {
        self.info = info;
        self
    }

    /// Add a whole statement for a period.
    ///
    /// If the period already has a statement of this kind, for example from
    /// two column labels naming the same date, the line items are merged.
    pub fn statement(
        mut self,
        period: Period,
        kind: StatementKind,
        record: StatementRecord,
    ) -> Self {
        let slot = self.snapshots.entry(period).or_default().slot_mut(kind);
        match slot {
            Some(existing) => {
                warn!(
                    ticker = %self.ticker,
                    %period,
                    %kind,
                    "duplicate statement for period; merging line items"
                );
                existing.merge(record);
            }
            None => *slot = Some(record),
        }
        self
    }

    /// Set a single line item, creating the statement if needed.
    pub fn field(
        mut self,
        period: Period,
        kind: StatementKind,
        name: impl Into<String>,
        value: f64,
    ) -> Self {
        self.snapshots
            .entry(period)
            .or_default()
            .slot_mut(kind)
            .get_or_insert_with(StatementRecord::new)
            .insert(name, Some(value));
        self
    }

    /// Add every column of a provider statement table.
    ///
    /// A column whose label is not a date, such as a trailing-twelve-months
    /// column, is skipped with a warning.
    pub fn table(mut self, kind: StatementKind, table: &StatementTable) -> Self {
        for (label, fields) in table {
            match Period::parse(label) {
                Ok(period) => {
                    self = self.statement(period, kind, StatementRecord::from(fields.clone()));
                }
                Err(error) => {
                    warn!(
                        ticker = %self.ticker,
                        label,
                        %kind,
                        %error,
                        "skipping statement column"
                    );
                }
            }
        }
        self
    }

    /// Add every column of a provider statement table, rejecting bad labels.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidPeriod`](crate::DataError::InvalidPeriod)
    /// for a column label that is not a date.
    pub fn try_table(mut self, kind: StatementKind, table: &StatementTable) -> Result<Self> {
        for (label, fields) in table {
            let period = Period::parse(label)?;
            self = self.statement(period, kind, StatementRecord::from(fields.clone()));
        }
        Ok(self)
    }

    /// Finish building.
    ///
    /// Periods lacking a balance sheet or an income statement are kept; the
    /// ratios that need the missing statement will be undefined for them.
    pub fn build(self) -> StatementStore {
        for (period, snapshot) in &self.snapshots {
            let missing = snapshot.missing_kinds();
            if missing.iter().any(|kind| *kind != StatementKind::CashFlow) {
                warn!(
                    ticker = %self.ticker,
                    %period,
                    ?missing,
                    "period is missing a core statement"
                );
            } else if !missing.is_empty() {
                debug!(ticker = %self.ticker, %period, "period has no cash flow statement");
            }
        }

        debug!(
            ticker = %self.ticker,
            periods = self.snapshots.len(),
            info_fields = self.info.len(),
            "statement store built"
        );

        StatementStore {
            ticker: self.ticker,
            snapshots: self.snapshots,
            info: self.info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    #[test]
    fn test_builder_merges_statements_per_period() {
        let p = period("2023-03-31");
        let store = StatementStore::builder()
            .ticker("ITC.NS")
            .field(p, StatementKind::BalanceSheet, "Current Assets", 300.0)
            .field(p, StatementKind::BalanceSheet, "Current Liabilities", 100.0)
            .field(p, StatementKind::IncomeStatement, "Total Revenue", 900.0)
            .build();

        assert_eq!(store.ticker(), "ITC.NS");
        assert_eq!(store.len(), 1);

        let snapshot = store.snapshot(&p).unwrap();
        let bs = snapshot.balance_sheet.as_ref().unwrap();
        assert_eq!(bs.value("Current Assets"), Some(300.0));
        assert_eq!(bs.value("Current Liabilities"), Some(100.0));
        assert!(snapshot.income_statement.is_some());
        assert!(snapshot.cash_flow.is_none());
    }

    #[test]
    fn test_periods_are_ascending() {
        let [p21, p22, p23] = ["2021-03-31", "2022-03-31", "2023-03-31"].map(period);
        let store = StatementStore::builder()
            .field(p23, StatementKind::BalanceSheet, "Total Assets", 1.0)
            .field(p21, StatementKind::BalanceSheet, "Total Assets", 1.0)
            .field(p22, StatementKind::IncomeStatement, "EBIT", 1.0)
            .build();

        assert_eq!(store.periods(), vec![p21, p22, p23]);
    }

    #[test]
    fn test_try_table_rejects_bad_labels() {
        let mut table = StatementTable::new();
        table.insert("not-a-date".to_string(), BTreeMap::new());

        let result = StatementStore::builder().try_table(StatementKind::BalanceSheet, &table);
        assert!(matches!(result, Err(DataError::InvalidPeriod(_))));
    }

    #[test]
    fn test_table_skips_bad_labels() {
        let mut table = StatementTable::new();
        table.insert(
            "TTM".to_string(),
            BTreeMap::from([("Total Assets".to_string(), Some(9.0))]),
        );
        table.insert(
            "2023-03-31".to_string(),
            BTreeMap::from([("Total Assets".to_string(), Some(5.0))]),
        );

        let store = StatementStore::builder()
            .table(StatementKind::BalanceSheet, &table)
            .build();

        assert_eq!(store.periods(), vec![period("2023-03-31")]);
    }

    #[test]
    fn test_same_date_labels_merge_line_items() {
        let mut table = StatementTable::new();
        table.insert(
            "2023-03-31 00:00:00".to_string(),
            BTreeMap::from([
                ("Current Assets".to_string(), Some(300.0)),
                ("Current Liabilities".to_string(), Some(100.0)),
            ]),
        );
        table.insert(
            "2023-03-31".to_string(),
            BTreeMap::from([("Total Assets".to_string(), Some(5.0))]),
        );

        let store = StatementStore::builder()
            .table(StatementKind::BalanceSheet, &table)
            .build();

        assert_eq!(store.len(), 1);
        let bs = store
            .snapshot(&period("2023-03-31"))
            .and_then(|s| s.balance_sheet.as_ref())
            .unwrap();
        assert_eq!(bs.value("Current Assets"), Some(300.0));
        assert_eq!(bs.value("Current Liabilities"), Some(100.0));
        assert_eq!(bs.value("Total Assets"), Some(5.0));
    }

    #[test]
    fn test_empty_store() {
        let store = StatementStore::empty("AAPL");
        assert!(store.is_empty());
        assert_eq!(store.ticker(), "AAPL");
        assert!(store.info().is_empty());
    }
}
