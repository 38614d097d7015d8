//! The ratio evaluation loop.

use crate::config::AnalysisConfig;
use crate::error::Result;
use ratiocalc_data::{FundamentalsSource, StatementStore};
use ratiocalc_output::{HealthScore, ResultTable};
use ratiocalc_ratios::{PeriodInputs, RatioDefinition, available_ratios, evaluate_period};
use serde::Serialize;
use tracing::{debug, warn};

/// Output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Ratio x period grid
    pub table: ResultTable,

    /// Exclusions that matched no period and were ignored
    pub unmatched_exclusions: Vec<String>,

    /// Overall health score, if any ratio could be scored
    pub health: Option<HealthScore>,
}

/// Evaluates the ratio catalog over a statement store.
#[derive(Debug, Clone)]
pub struct RatioAnalyzer {
    catalog: Vec<RatioDefinition>,
}

impl Default for RatioAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RatioAnalyzer {
    /// Analyzer over the full ratio catalog.
    pub fn new() -> Self {
        Self {
            catalog: available_ratios(),
        }
    }

    /// Analyzer over a custom catalog.
    ///
    /// Derived ratios read cells computed earlier in the same period, so
    /// each definition must come after its [`inputs`](RatioDefinition::inputs);
    /// a derived ratio whose input is missing is undefined.
    pub const fn with_catalog(catalog: Vec<RatioDefinition>) -> Self {
        Self { catalog }
    }

    /// The catalog, in row order.
    pub fn catalog(&self) -> &[RatioDefinition] {
        &self.catalog
    }

    /// Evaluate every ratio for every reported period of `store`.
    ///
    /// Market ratios are only defined in the most recent reported column,
    /// since market info is a point-in-time snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidDateRange`](crate::AnalysisError::InvalidDateRange)
    /// for an inverted date range. Undefined cells are not errors.
    pub fn analyze(&self, store: &StatementStore, config: &AnalysisConfig) -> Result<Analysis> {
        config.validate()?;

        let ticker = if store.ticker().is_empty() {
            config.ticker.as_str()
        } else {
            store.ticker()
        };
        let alignment = config.aligner().align(&store.periods());
        let resolver = config.resolver();
        let latest = alignment.latest();

        let mut table = ResultTable::new(ticker, &self.catalog);
        for period in alignment.reported() {
            let Some(current) = store.snapshot(period) else {
                continue;
            };
            let inputs = PeriodInputs {
                period: *period,
                current,
                prior: alignment.prior(period).and_then(|p| store.snapshot(&p)),
                market: (latest == Some(*period)).then(|| store.info()),
                resolver: &resolver,
            };

            let cells = evaluate_period(&self.catalog, &inputs);
            debug!(
                ticker,
                %period,
                defined = cells.iter().filter(|c| c.is_defined()).count(),
                ratios = cells.len(),
                "period evaluated"
            );
            table.push_column(*period, cells)?;
        }

        let health = HealthScore::compute_weighted(&table, &config.weights);
        Ok(Analysis {
            table,
            unmatched_exclusions: alignment.unmatched().to_vec(),
            health,
        })
    }

    /// Fetch fundamentals for the configured ticker and analyze them.
    ///
    /// A failing source degrades to an empty store: the result then has
    /// every ratio row and no period columns. Statement columns whose label
    /// is not a date are skipped and the rest of the payload is analyzed.
    ///
    /// # Errors
    ///
    /// Only configuration errors, as for [`analyze`](Self::analyze).
    pub fn run<S>(&self, source: &S, config: &AnalysisConfig) -> Result<Analysis>
    where
        S: FundamentalsSource + ?Sized,
    {
        config.validate()?;

        let store = match source.fetch(&config.ticker) {
            Ok(fundamentals) => StatementStore::from_fundamentals(&fundamentals),
            Err(e) => {
                warn!(
                    ticker = %config.ticker,
                    error = %e,
                    "no usable fundamentals; continuing with an empty store"
                );
                StatementStore::empty(config.ticker.clone())
            }
        };

        self.analyze(&store, config)
    }
}

/// Fetch fundamentals for `ticker` and index them by period.
///
/// Unlike [`RatioAnalyzer::run`], nothing is skipped.
///
/// # Errors
///
/// Returns [`AnalysisError::Data`](crate::AnalysisError::Data) if the source
/// fails or a statement column label is not a date.
pub fn load_store<S>(source: &S, ticker: &str) -> Result<StatementStore>
where
    S: FundamentalsSource + ?Sized,
{
    let fundamentals = source.fetch(ticker)?;
    Ok(StatementStore::try_from_fundamentals(&fundamentals)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use ratiocalc_data::{Fundamentals, Period, StatementKind, StaticSource};
    use ratiocalc_ratios::{RatioValue, Undefined};

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    fn store() -> StatementStore {
        let [p22, p23] = ["2022-12-31", "2023-12-31"].map(period);
        let bs = StatementKind::BalanceSheet;
        StatementStore::builder()
            .ticker("TEST")
            .field(p23, bs, "Current Assets", 300.0)
            .field(p23, bs, "Current Liabilities", 100.0)
            .field(p22, bs, "Current Assets", 280.0)
            .field(p22, bs, "Current Liabilities", 100.0)
            .build()
    }

    #[test]
    fn test_analyze_fills_every_row() {
        let analyzer = RatioAnalyzer::new();
        let analysis = analyzer
            .analyze(&store(), &AnalysisConfig::new("TEST"))
            .unwrap();

        assert_eq!(analysis.table.rows().len(), analyzer.catalog().len());
        assert_eq!(analysis.table.periods().len(), 2);
        assert_eq!(analysis.table.defined_count(), 2);
    }

    #[test]
    fn test_market_ratios_only_in_latest_column() {
        let table = RatioAnalyzer::new()
            .analyze(&store(), &AnalysisConfig::new("TEST"))
            .unwrap()
            .table;

        assert_eq!(
            table.get("Price to Book (P/B)", &period("2022-12-31")),
            Some(RatioValue::Undefined(Undefined::NotApplicable))
        );
        assert!(matches!(
            table.get("Price to Book (P/B)", &period("2023-12-31")),
            Some(RatioValue::Undefined(Undefined::MissingMarketDatum(_)))
        ));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog: Vec<_> = available_ratios().into_iter().take(3).collect();
        let analysis = RatioAnalyzer::with_catalog(catalog)
            .analyze(&store(), &AnalysisConfig::new("TEST"))
            .unwrap();

        assert_eq!(
            analysis.table.ratio_names(),
            vec!["Current Ratio", "Quick Ratio", "Cash Ratio"]
        );
    }

    #[test]
    fn test_invalid_range_rejected_before_fetch() {
        let config = AnalysisConfig::new("TEST")
            .with_start(period("2024-01-01").end_date())
            .with_end(period("2023-01-01").end_date());

        assert!(matches!(
            RatioAnalyzer::new().run(&StaticSource::new(), &config),
            Err(AnalysisError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_load_store_rejects_bad_labels() {
        let mut payload = Fundamentals::empty("TTMCO");
        payload.balance_sheet.insert(
            "TTM".to_string(),
            [("Total Assets".to_string(), Some(1.0))].into(),
        );
        let source = StaticSource::new().with(payload);

        assert!(
            matches!(load_store(&source, "TTMCO"), Err(AnalysisError::Data(_)))
        );
    }

    #[test]
    fn test_load_store_propagates_source_error() {
        let source = StaticSource::new().with(Fundamentals::empty("KNOWN"));

        assert!(load_store(&source, "KNOWN").is_ok());
        assert!(
            matches!(load_store(&source, "UNKNOWN"), Err(AnalysisError::Data(_)))
        );
    }
}
