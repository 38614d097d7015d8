//! Analysis configuration.

use crate::aligner::PeriodAligner;
use crate::error::{AnalysisError, Result};
use chrono::NaiveDate;
use ratiocalc_ratios::{FieldResolver, LogicalField};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Options of one analysis run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```
/// use ratiocalc::AnalysisConfig;
///
/// let config: AnalysisConfig = serde_json::from_str(
///     r#"{"ticker": "ITC.NS", "exclude_periods": ["2021-03-31"]}"#,
/// )
/// .unwrap();
/// assert_eq!(config.exclude_periods.len(), 1);
/// assert!(config.start.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Ticker symbol, passed to the data source as is
    pub ticker: String,

    /// Periods (`YYYY-MM-DD`) to drop from the reported columns
    pub exclude_periods: Vec<String>,

    /// Earliest period end date to consider (inclusive)
    pub start: Option<NaiveDate>,

    /// Latest period end date to consider (inclusive)
    pub end: Option<NaiveDate>,

    /// Health score weights by ratio name; unlisted ratios weigh 1
    pub weights: HashMap<String, f64>,

    /// Extra raw field names tried before the built-in aliases
    pub aliases: BTreeMap<LogicalField, Vec<String>>,
}

impl AnalysisConfig {
    /// Default configuration for `ticker`.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    /// Drop a period from the reported columns.
    pub fn exclude(mut self, period: impl Into<String>) -> Self {
        self.exclude_periods.push(period.into());
        self
    }

    /// Ignore periods ending before `start`.
    pub const fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Ignore periods ending after `end`.
    pub const fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the health score weight of a ratio.
    pub fn with_weight(mut self, ratio: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(ratio.into(), weight);
        self
    }

    /// Try `aliases` before the built-in aliases of `field`.
    pub fn with_aliases<I, S>(mut self, field: LogicalField, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .entry(field)
            .or_default()
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidDateRange`] if `start` is after `end`.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(AnalysisError::InvalidDateRange { start, end });
        }
        Ok(())
    }

    /// Field resolver with the configured aliases.
    pub fn resolver(&self) -> FieldResolver {
        self.aliases
            .iter()
            .fold(FieldResolver::new(), |resolver, (field, aliases)| {
                resolver.with_aliases(*field, aliases.iter().cloned())
            })
    }

    /// Period aligner with the configured exclusions and bounds.
    pub fn aligner(&self) -> PeriodAligner {
        PeriodAligner::new()
            .exclude(self.exclude_periods.iter().cloned())
            .between(self.start, self.end)
    }
}
