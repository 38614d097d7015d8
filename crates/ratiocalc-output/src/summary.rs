//! Overall financial health score.
//!
//! Each directional ratio's latest value is placed within the range of its
//! own history in the table (0 = worst seen, 1 = best seen), and the scores
//! are combined into a weighted average on a 0-100 scale.

use crate::table::{ResultRow, ResultTable};
use ratiocalc_ratios::Direction;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Score assigned when a ratio has fewer than two defined values.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Score of one ratio against its history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioScore {
    /// Row label.
    pub name: &'static str,

    /// Score in [0, 1].
    pub score: f64,

    /// Weight in the overall score.
    pub weight: f64,
}

/// Weighted health score of a result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScore {
    /// Overall score in [0, 100].
    pub score: f64,

    /// Per-ratio scores, in catalog order.
    pub components: Vec<RatioScore>,
}

impl HealthScore {
    /// Score `table` with unit weights.
    pub fn compute(table: &ResultTable) -> Option<Self> {
        Self::compute_weighted(table, &HashMap::new())
    }

    /// Score `table`, weighting ratios by name (missing names weigh 1).
    ///
    /// Returns `None` if no ratio could be scored or the weights of the
    /// scored ratios sum to zero.
    pub fn compute_weighted(table: &ResultTable, weights: &HashMap<String, f64>) -> Option<Self> {
        let components: Vec<RatioScore> = table
            .rows()
            .iter()
            .filter_map(|row| {
                let score = score_row(row)?;
                let weight = weights.get(row.name).copied().unwrap_or(1.0);
                Some(RatioScore {
                    name: row.name,
                    score,
                    weight,
                })
            })
            .collect();

        let total_weight: f64 = components.iter().map(|c| c.weight).sum();
        if components.is_empty() || total_weight == 0.0 {
            debug!(ticker = table.ticker(), "no ratio could be scored");
            return None;
        }

        let weighted: f64 = components.iter().map(|c| c.weight * c.score).sum();
        let score = weighted / total_weight * 100.0;
        debug!(
            ticker = table.ticker(),
            score,
            scored = components.len(),
            "health score"
        );

        Some(Self { score, components })
    }

    /// Score of a single ratio, if it was scored.
    pub fn component(&self, name: &str) -> Option<&RatioScore> {
        self.components.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Overall health score: {:.1}/100 ({} ratios scored)",
            self.score,
            self.components.len()
        )
    }
}

/// Score the latest value of `row` against its defined history.
fn score_row(row: &ResultRow) -> Option<f64> {
    if row.direction == Direction::Neutral {
        return None;
    }
    let current = row.latest()?.value()?;

    let history: Vec<f64> = row.defined().collect();
    if history.len() < 2 {
        return Some(NEUTRAL_SCORE);
    }

    let min = history.iter().copied().fold(f64::INFINITY, f64::min);
    let max = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let higher_is_better = row.direction == Direction::HigherIsBetter;

    let score = if max == min {
        let at_least_as_good = if higher_is_better {
            current >= min
        } else {
            current <= min
        };
        if at_least_as_good { 1.0 } else { 0.0 }
    } else {
        let position = (current - min) / (max - min);
        if higher_is_better {
            position.min(1.0)
        } else {
            (1.0 - position).max(0.0)
        }
    };

    Some(score)
}
