//! Point-in-time market info supplied by the data provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Provider "info" mapping: quote data and pre-aggregated market ratios.
///
/// Values are kept as raw JSON since providers mix numbers, strings and
/// nulls in the same mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketInfo {
    values: HashMap<String, Value>,
}

impl MarketInfo {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Finite numeric value for a key.
    ///
    /// Numeric strings are accepted; anything else counts as absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        let number = match self.values.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number.filter(|v| v.is_finite())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for MarketInfo {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
