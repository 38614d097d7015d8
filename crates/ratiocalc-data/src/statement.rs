//! Statement records and per-period snapshots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The kind of financial statement a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Balance sheet (point-in-time positions)
    BalanceSheet,
    /// Income statement (flows over the period)
    IncomeStatement,
    /// Cash flow statement
    CashFlow,
}

impl StatementKind {
    /// All statement kinds.
    pub const ALL: [Self; 3] = [Self::BalanceSheet, Self::IncomeStatement, Self::CashFlow];

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "balance sheet",
            Self::IncomeStatement => "income statement",
            Self::CashFlow => "cash flow",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw line items of one statement for one period.
///
/// Keys are provider field names exactly as delivered. A field may be present
/// with a null value; [`StatementRecord::value`] treats null and non-finite
/// numbers as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementRecord {
    fields: BTreeMap<String, Option<f64>>,
}

impl StatementRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a line item. `None` records an explicit null.
    pub fn insert(&mut self, field: impl Into<String>, value: Option<f64>) {
        self.fields.insert(field.into(), value);
    }

    /// Usable value of a line item.
    ///
    /// Returns `None` if the field is absent, null, NaN or infinite.
    pub fn value(&self, field: &str) -> Option<f64> {
        self.fields
            .get(field)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// Whether the field key exists at all, even with a null value.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of line items, nulls included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no line items.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over raw line items.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fold another record's line items into this one.
    ///
    /// A value from `other` replaces an existing entry; a null from `other`
    /// only fills a field this record lacks.
    pub fn merge(&mut self, other: Self) {
        for (field, value) in other.fields {
            match value {
                Some(_) => {
                    self.fields.insert(field, value);
                }
                None => {
                    self.fields.entry(field).or_insert(None);
                }
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StatementRecord {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect(),
        }
    }
}

impl From<BTreeMap<String, Option<f64>>> for StatementRecord {
    fn from(fields: BTreeMap<String, Option<f64>>) -> Self {
        Self { fields }
    }
}

/// All statements reported for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    /// Balance sheet, if reported
    pub balance_sheet: Option<StatementRecord>,
    /// Income statement, if reported
    pub income_statement: Option<StatementRecord>,
    /// Cash flow statement, if reported
    pub cash_flow: Option<StatementRecord>,
}

impl PeriodSnapshot {
    /// Statement of the given kind, if present.
    pub const fn statement(&self, kind: StatementKind) -> Option<&StatementRecord> {
        match kind {
            StatementKind::BalanceSheet => self.balance_sheet.as_ref(),
            StatementKind::IncomeStatement => self.income_statement.as_ref(),
            StatementKind::CashFlow => self.cash_flow.as_ref(),
        }
    }

    /// Mutable slot for the given statement kind.
    pub(crate) const fn slot_mut(&mut self, kind: StatementKind) -> &mut Option<StatementRecord> {
        match kind {
            StatementKind::BalanceSheet => &mut self.balance_sheet,
            StatementKind::IncomeStatement => &mut self.income_statement,
            StatementKind::CashFlow => &mut self.cash_flow,
        }
    }

    /// Whether a statement of the given kind is present.
    pub const fn has(&self, kind: StatementKind) -> bool {
        self.statement(kind).is_some()
    }

    /// Statement kinds this snapshot lacks.
    pub fn missing_kinds(&self) -> Vec<StatementKind> {
        StatementKind::ALL
            .into_iter()
            .filter(|kind| !self.has(*kind))
            .collect()
    }
}
