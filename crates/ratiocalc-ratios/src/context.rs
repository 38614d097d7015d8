//! Per-period evaluation context.

use crate::fields::{FieldResolver, LogicalField, MarketField};
use crate::registry::{RatioDefinition, RatioId};
use crate::value::{Evaluation, RatioValue, Undefined};
use ratiocalc_data::{MarketInfo, Period, PeriodSnapshot};
use std::collections::BTreeMap;
use tracing::trace;

/// Days per year used by the days-based activity ratios.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Everything one reported period needs for evaluation.
#[derive(Debug, Clone, Copy)]
pub struct PeriodInputs<'a> {
    /// The reported period
    pub period: Period,
    /// Statements of the reported period
    pub current: &'a PeriodSnapshot,
    /// Statements of the chronologically preceding period, if any
    pub prior: Option<&'a PeriodSnapshot>,
    /// Market info; only supplied for the period that carries market ratios
    pub market: Option<&'a MarketInfo>,
    /// Field alias resolver
    pub resolver: &'a FieldResolver,
}

/// View handed to each formula: the period inputs plus the ratios already
/// computed for the same period.
#[derive(Debug, Clone, Copy)]
pub struct PeriodContext<'a> {
    inputs: &'a PeriodInputs<'a>,
    computed: &'a BTreeMap<RatioId, RatioValue>,
}

impl<'a> PeriodContext<'a> {
    pub(crate) const fn new(
        inputs: &'a PeriodInputs<'a>,
        computed: &'a BTreeMap<RatioId, RatioValue>,
    ) -> Self {
        Self { inputs, computed }
    }

    /// The period being evaluated.
    pub const fn period(&self) -> Period {
        self.inputs.period
    }

    /// A field of the current period.
    pub fn field(&self, field: LogicalField) -> Evaluation {
        self.inputs.resolver.lookup(field, self.inputs.current)
    }

    /// A field of the prior period.
    pub fn prior_field(&self, field: LogicalField) -> Evaluation {
        let prior = self.inputs.prior.ok_or(Undefined::MissingPriorPeriod)?;
        self.inputs.resolver.lookup(field, prior)
    }

    /// Mean of a field over the current and prior period.
    pub fn average(&self, field: LogicalField) -> Evaluation {
        let current = self.field(field)?;
        let prior = self.prior_field(field)?;
        Ok((current + prior) / 2.0)
    }

    /// A ratio computed earlier for the same period.
    pub fn ratio(&self, id: RatioId) -> Evaluation {
        self.computed
            .get(&id)
            .and_then(RatioValue::value)
            .ok_or(Undefined::UndefinedInput(id))
    }

    /// A market info value.
    ///
    /// Undefined as [`Undefined::NotApplicable`] for periods that do not
    /// carry market ratios.
    pub fn market(&self, field: MarketField) -> Evaluation {
        let info = self.inputs.market.ok_or(Undefined::NotApplicable)?;
        self.inputs
            .resolver
            .resolve_market(field, info)
            .ok_or(Undefined::MissingMarketDatum(field))
    }
}

/// `numerator / denominator`, undefined on a zero denominator.
pub fn divide(numerator: f64, denominator: f64) -> Evaluation {
    if denominator == 0.0 {
        return Err(Undefined::ZeroDenominator);
    }
    Ok(numerator / denominator)
}

/// Evaluate `catalog` in order for one period.
///
/// Returns one cell per definition, aligned with `catalog`. Derived ratios
/// read the cells of their inputs, so inputs must precede them in the
/// catalog.
pub fn evaluate_period(catalog: &[RatioDefinition], inputs: &PeriodInputs<'_>) -> Vec<RatioValue> {
    let mut computed = BTreeMap::new();
    let mut cells = Vec::with_capacity(catalog.len());

    for definition in catalog {
        let value = definition.evaluate(&PeriodContext::new(inputs, &computed));
        if let RatioValue::Undefined(reason) = value {
            trace!(period = %inputs.period, ratio = definition.name(), %reason, "ratio undefined");
        }
        computed.insert(definition.id, value);
        cells.push(value);
    }

    cells
}
