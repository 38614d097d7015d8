//! Ratio cell values.

use crate::fields::{LogicalField, MarketField};
use crate::registry::RatioId;
use ratiocalc_data::StatementKind;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Why a ratio could not be computed.
///
/// Undefined cells are ordinary values of the result, not failures of the
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Undefined {
    /// No alias of a required field has a usable value
    #[error("missing field: {0}")]
    MissingField(LogicalField),

    /// The statement that reports a required field is absent for the period
    #[error("missing statement: {0}")]
    MissingStatement(StatementKind),

    /// An averaged ratio has no chronologically preceding period
    #[error("no prior period to average with")]
    MissingPriorPeriod,

    /// The denominator evaluated to zero
    #[error("zero denominator")]
    ZeroDenominator,

    /// A ratio this one is derived from is undefined
    #[error("input ratio undefined: {0}")]
    UndefinedInput(RatioId),

    /// The market info mapping lacks a usable entry
    #[error("missing market datum: {0}")]
    MissingMarketDatum(MarketField),

    /// The computation produced NaN or an infinity
    #[error("non-finite result")]
    NonFinite,

    /// The ratio is not reported for this period
    #[error("not applicable to this period")]
    NotApplicable,
}

/// Outcome of one formula evaluation.
pub type Evaluation = Result<f64, Undefined>;

/// A single cell of the result table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioValue {
    /// Finite computed value
    Value(f64),
    /// No value, with the reason
    Undefined(Undefined),
}

impl RatioValue {
    /// The numeric value, if defined.
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Undefined(_) => None,
        }
    }

    /// Whether the cell holds a value.
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Why the cell is undefined, if it is.
    pub const fn reason(&self) -> Option<Undefined> {
        match self {
            Self::Value(_) => None,
            Self::Undefined(reason) => Some(*reason),
        }
    }
}

impl From<Evaluation> for RatioValue {
    fn from(result: Evaluation) -> Self {
        match result {
            Ok(v) if v.is_finite() => Self::Value(v),
            Ok(_) => Self::Undefined(Undefined::NonFinite),
            Err(reason) => Self::Undefined(reason),
        }
    }
}

impl From<RatioValue> for Option<f64> {
    fn from(value: RatioValue) -> Self {
        value.value()
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => fmt::Display::fmt(v, f),
            Self::Undefined(_) => f.pad("-"),
        }
    }
}

impl Serialize for RatioValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Undefined(_) => serializer.serialize_none(),
        }
    }
}
