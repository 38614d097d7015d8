//! Reporting order and prior-period pairing.

use chrono::NaiveDate;
use ratiocalc_data::Period;
use tracing::{debug, warn};

/// Decides which periods are reported and which period each one averages
/// against.
///
/// Date bounds restrict the history itself. Exclusions only remove reported
/// columns: an excluded period still serves as the prior of its successor,
/// so averaging ratios of neighbouring periods are unaffected.
#[derive(Debug, Clone, Default)]
pub struct PeriodAligner {
    exclusions: Vec<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl PeriodAligner {
    /// Aligner that reports every period.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude periods (`YYYY-MM-DD`) from the reported columns.
    pub fn exclude<I, S>(mut self, periods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(periods.into_iter().map(Into::into));
        self
    }

    /// Restrict the history to `start..=end`; `None` leaves a side open.
    pub const fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    fn in_bounds(&self, period: &Period) -> bool {
        let date = period.end_date();
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Align the periods available in a store.
    pub fn align(&self, periods: &[Period]) -> Alignment {
        let mut history: Vec<Period> = periods
            .iter()
            .copied()
            .filter(|p| self.in_bounds(p))
            .collect();
        history.sort_unstable();
        history.dedup();

        let mut excluded = Vec::new();
        let mut unmatched = Vec::new();
        for raw in &self.exclusions {
            match Period::parse(raw) {
                Ok(period) if history.binary_search(&period).is_ok() => excluded.push(period),
                Ok(_) => {
                    warn!(exclusion = %raw, "excluded period is not in the history; ignoring");
                    unmatched.push(raw.clone());
                }
                Err(e) => {
                    warn!(exclusion = %raw, error = %e, "unparseable period exclusion; ignoring");
                    unmatched.push(raw.clone());
                }
            }
        }

        let reported: Vec<Period> = history
            .iter()
            .rev()
            .copied()
            .filter(|p| !excluded.contains(p))
            .collect();

        debug!(
            history = history.len(),
            reported = reported.len(),
            excluded = excluded.len(),
            "periods aligned"
        );

        Alignment {
            history,
            reported,
            unmatched,
        }
    }
}

/// Result of [`PeriodAligner::align`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    history: Vec<Period>,
    reported: Vec<Period>,
    unmatched: Vec<String>,
}

impl Alignment {
    /// Periods to report, most recent first.
    pub fn reported(&self) -> &[Period] {
        &self.reported
    }

    /// Every period within the date bounds, oldest first.
    pub fn history(&self) -> &[Period] {
        &self.history
    }

    /// Exclusions that were ignored.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Most recent reported period.
    pub fn latest(&self) -> Option<Period> {
        self.reported.first().copied()
    }

    /// The period immediately preceding `period` in the history, excluded
    /// or not.
    pub fn prior(&self, period: &Period) -> Option<Period> {
        let index = self.history.binary_search(period).ok()?;
        index.checked_sub(1).map(|i| self.history[i])
    }
}
