//! Provider payloads and the data-source seam.
//!
//! Fetching is owned by an upstream collaborator. It hands over statement
//! tables in the column-oriented shape of a DataFrame JSON export:
//!
//! ```json
//! {
//!   "ticker": "ITC.NS",
//!   "info": { "trailingPE": 27.1 },
//!   "balance_sheet": { "2023-03-31": { "Current Assets": 300.0, "Inventory": null } },
//!   "income_statement": { "2023-03-31": { "Total Revenue": 900.0 } },
//!   "cash_flow": {}
//! }
//! ```

use crate::error::{DataError, Result};
use crate::market::MarketInfo;
use crate::statement::StatementKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// One statement across periods: column label → line item → value.
pub type StatementTable = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// Everything the provider returns for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Ticker symbol, opaque to the core
    #[serde(default)]
    pub ticker: String,
    /// Point-in-time market info
    #[serde(default)]
    pub info: MarketInfo,
    /// Balance sheet columns
    #[serde(default)]
    pub balance_sheet: StatementTable,
    /// Income statement columns
    #[serde(default)]
    pub income_statement: StatementTable,
    /// Cash flow columns
    #[serde(default)]
    pub cash_flow: StatementTable,
}

impl Fundamentals {
    /// An empty payload for `ticker`.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    /// Parse a payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Serialization`] on malformed JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a payload from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if reading fails and
    /// [`DataError::Serialization`] on malformed JSON.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Statement tables paired with their kind.
    pub fn statements(&self) -> [(StatementKind, &StatementTable); 3] {
        [
            (StatementKind::BalanceSheet, &self.balance_sheet),
            (StatementKind::IncomeStatement, &self.income_statement),
            (StatementKind::CashFlow, &self.cash_flow),
        ]
    }

    /// Whether no statement has any column.
    pub fn is_empty(&self) -> bool {
        self.statements().iter().all(|(_, table)| table.is_empty())
    }
}

/// Source of fundamentals for a ticker.
///
/// Implemented by provider clients. Called once per analysis, before any
/// ratio is computed.
pub trait FundamentalsSource {
    /// Fetch statements and market info for `ticker`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider has nothing usable for the ticker.
    fn fetch(&self, ticker: &str) -> Result<Fundamentals>;
}

/// In-memory source keyed by ticker.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    payloads: HashMap<String, Fundamentals>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload under its own ticker.
    pub fn with(mut self, fundamentals: Fundamentals) -> Self {
        self.payloads
            .insert(fundamentals.ticker.to_uppercase(), fundamentals);
        self
    }
}

impl FundamentalsSource for StaticSource {
    fn fetch(&self, ticker: &str) -> Result<Fundamentals> {
        self.payloads
            .get(&ticker.to_uppercase())
            .cloned()
            .ok_or_else(|| DataError::MissingData {
                symbol: ticker.to_string(),
                reason: "No fundamentals registered".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "ticker": "ITC.NS",
        "info": {"trailingPE": 27.1},
        "balance_sheet": {
            "2023-03-31 00:00:00": {"Current Assets": 300.0, "Inventory": null},
            "2022-03-31 00:00:00": {"Current Assets": 280.0}
        },
        "income_statement": {
            "2023-03-31 00:00:00": {"Total Revenue": 900.0}
        }
    }"#;

    #[test]
    fn test_parse_payload() {
        let fundamentals = Fundamentals::from_json_str(PAYLOAD).unwrap();

        assert_eq!(fundamentals.ticker, "ITC.NS");
        assert_eq!(fundamentals.balance_sheet.len(), 2);
        assert_eq!(fundamentals.income_statement.len(), 1);
        assert!(fundamentals.cash_flow.is_empty());
        assert!(!fundamentals.is_empty());

        let latest = &fundamentals.balance_sheet["2023-03-31 00:00:00"];
        assert_eq!(latest["Inventory"], None);
    }

    #[test]
    fn test_malformed_payload() {
        let result = Fundamentals::from_json_str("{\"balance_sheet\": [1, 2]}");
        assert!(matches!(result, Err(DataError::Serialization(_))));
    }

    #[test]
    fn test_from_reader() {
        let fundamentals = Fundamentals::from_reader(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(fundamentals.ticker, "ITC.NS");

        let result = Fundamentals::from_reader("{\"ticker\": ".as_bytes());
        assert!(matches!(result, Err(DataError::Serialization(_))));
    }

    #[test]
    fn test_from_reader_surfaces_read_failure() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("connection reset"))
            }
        }

        let result = Fundamentals::from_reader(FailingReader);
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_static_source_lookup_is_case_insensitive() {
        let source = StaticSource::new().with(Fundamentals::empty("itc.ns"));

        assert!(source.fetch("ITC.NS").is_ok());
        assert!(
            matches!(source.fetch("AAPL"), Err(DataError::MissingData { .. }))
        );
    }
}
