//! Fiscal period identifiers.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fiscal period, identified by its end date.
///
/// Periods order by calendar date. Reports list them most recent first, while
/// period-over-period averages look back to the chronologically preceding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(NaiveDate);

impl Period {
    /// Create a period ending on `end`.
    pub const fn new(end: NaiveDate) -> Self {
        Self(end)
    }

    /// Create a period from year, month and day.
    ///
    /// Returns `None` for an impossible calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Period end date.
    pub const fn end_date(&self) -> NaiveDate {
        self.0
    }

    /// Parse a period identifier.
    ///
    /// Accepts `YYYY-MM-DD` and the `YYYY-MM-DD HH:MM:SS` form that DataFrame
    /// exports use for column labels. The time part is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let date_part = s.split_once([' ', 'T']).map_or(s, |(date, _)| date);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DataError::InvalidPeriod(s.to_string()))
    }
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Period {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-03-31")]
    #[case("2023-03-31 00:00:00")]
    #[case("2023-03-31T00:00:00")]
    #[case("  2023-03-31 ")]
    fn test_parse_accepted_forms(#[case] raw: &str) {
        let period = Period::parse(raw).unwrap();
        assert_eq!(period, Period::from_ymd(2023, 3, 31).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("31/03/2023")]
    #[case("2023-02-30")]
    #[case("FY2023")]
    fn test_parse_rejects_invalid(#[case] raw: &str) {
        assert!(
            matches!(Period::parse(raw), Err(DataError::InvalidPeriod(_)))
        );
    }

    #[test]
    fn test_ordering_by_date() {
        let older = Period::from_ymd(2022, 3, 31).unwrap();
        let newer = Period::from_ymd(2023, 3, 31).unwrap();
        assert!(older < newer);

        let mut periods = vec![older, newer];
        periods.sort_by(|a, b| b.cmp(a));
        assert_eq!(periods, vec![newer, older]);
    }

    #[test]
    fn test_display_and_serde() {
        let period = Period::from_ymd(2024, 12, 31).unwrap();
        assert_eq!(period.to_string(), "2024-12-31");

        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"2024-12-31\"");

        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
    }
}
