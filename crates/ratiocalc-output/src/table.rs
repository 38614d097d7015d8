//! The ratio x period result grid.

use polars::prelude::*;
use ratiocalc_data::Period;
use ratiocalc_ratios::{Direction, RatioCategory, RatioDefinition, RatioId, RatioValue};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while assembling or converting a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Polars error during DataFrame conversion.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// A column does not have one cell per ratio row.
    #[error("column {period} has {found} cells, expected {expected}")]
    ShapeMismatch {
        /// Period of the offending column.
        period: Period,
        /// Number of ratio rows.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// One ratio's values across the reported periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// Ratio identifier.
    #[serde(skip)]
    pub id: RatioId,

    /// Row label.
    pub name: &'static str,

    /// Ratio category.
    pub category: RatioCategory,

    /// Preferred direction, used for scoring.
    #[serde(skip)]
    pub direction: Direction,

    /// One cell per reported period, most recent first.
    pub values: Vec<RatioValue>,
}

impl ResultRow {
    /// Cell of the most recent period.
    pub fn latest(&self) -> Option<RatioValue> {
        self.values.first().copied()
    }

    /// Defined values, most recent first.
    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(RatioValue::value)
    }
}

/// Ratio values for one ticker, indexed by ratio name and period.
///
/// Rows follow catalog order and columns are ordered most recent first.
/// Looking up an unknown ratio or period yields `None`, which is distinct
/// from a cell holding [`RatioValue::Undefined`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultTable {
    ticker: String,
    periods: Vec<Period>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Table with one row per catalog entry and no period columns.
    pub fn new(ticker: impl Into<String>, catalog: &[RatioDefinition]) -> Self {
        let rows = catalog
            .iter()
            .map(|definition| ResultRow {
                id: definition.id,
                name: definition.name(),
                category: definition.category,
                direction: definition.direction,
                values: Vec::new(),
            })
            .collect();

        Self {
            ticker: ticker.into(),
            periods: Vec::new(),
            rows,
        }
    }

    /// Append a period column; `cells` must be in catalog order.
    ///
    /// Columns are expected to arrive most recent first.
    pub fn push_column(&mut self, period: Period, cells: Vec<RatioValue>) -> Result<()> {
        if cells.len() != self.rows.len() {
            return Err(TableError::ShapeMismatch {
                period,
                expected: self.rows.len(),
                found: cells.len(),
            });
        }

        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.values.push(cell);
        }
        self.periods.push(period);
        Ok(())
    }

    /// Ticker the table was computed for.
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Reported periods, most recent first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// The most recent reported period.
    pub fn latest_period(&self) -> Option<Period> {
        self.periods.first().copied()
    }

    /// Row labels in catalog order.
    pub fn ratio_names(&self) -> Vec<&'static str> {
        self.rows.iter().map(|row| row.name).collect()
    }

    /// All rows in catalog order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Row by label.
    pub fn row(&self, name: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Row by identifier.
    pub fn row_by_id(&self, id: RatioId) -> Option<&ResultRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Cell for a ratio and period; `None` if either is not in the table.
    pub fn get(&self, name: &str, period: &Period) -> Option<RatioValue> {
        let column = self.column_index(period)?;
        self.row(name).map(|row| row.values[column])
    }

    /// Every cell of one period as `(ratio name, value)` in catalog order.
    pub fn column(&self, period: &Period) -> Option<Vec<(&'static str, RatioValue)>> {
        let column = self.column_index(period)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.name, row.values[column]))
                .collect(),
        )
    }

    /// Number of defined cells.
    pub fn defined_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.values.iter().filter(|v| v.is_defined()).count())
            .sum()
    }

    /// Whether the table has no period columns.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Convert to a DataFrame with `ratio` and `category` columns followed by
    /// one nullable `Float64` column per period.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.rows.iter().map(|row| row.name).collect();
        let categories: Vec<&str> = self.rows.iter().map(|row| row.category.name()).collect();

        let mut columns: Vec<Column> = vec![
            Series::new("ratio".into(), names).into(),
            Series::new("category".into(), categories).into(),
        ];
        for (index, period) in self.periods.iter().enumerate() {
            let values: Vec<Option<f64>> = self
                .rows
                .iter()
                .map(|row| row.values[index].value())
                .collect();
            columns.push(Series::new(period.to_string().into(), values).into());
        }

        Ok(DataFrame::new(columns)?)
    }

    fn column_index(&self, period: &Period) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }
}

const NAME_WIDTH: usize = 36;
const VALUE_WIDTH: usize = 12;

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = NAME_WIDTH + (VALUE_WIDTH + 1) * self.periods.len();

        writeln!(f, "Financial Ratios: {}", self.ticker)?;
        writeln!(f, "{}", "=".repeat(width))?;

        write!(f, "{:<NAME_WIDTH$}", "Ratio")?;
        for period in &self.periods {
            write!(f, " {:>VALUE_WIDTH$}", period.to_string())?;
        }
        writeln!(f)?;

        let mut category = None;
        for row in &self.rows {
            if category != Some(row.category) {
                writeln!(f, "{}", "-".repeat(width))?;
                writeln!(f, "{}", row.category)?;
                category = Some(row.category);
            }
            write!(f, "{:<NAME_WIDTH$}", row.name)?;
            for value in &row.values {
                write!(f, " {value:>VALUE_WIDTH$.4}")?;
            }
            writeln!(f)?;
        }

        write!(f, "{}", "=".repeat(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratiocalc_ratios::{Undefined, available_ratios};

    fn period(s: &str) -> Period {
        s.parse().unwrap()
    }

    fn cells(first: f64) -> Vec<RatioValue> {
        let mut cells = vec![RatioValue::Undefined(Undefined::MissingPriorPeriod); 35];
        cells[0] = RatioValue::Value(first);
        cells
    }

    fn table() -> ResultTable {
        let mut table = ResultTable::new("ITC.NS", &available_ratios());
        table.push_column(period("2023-03-31"), cells(3.0)).unwrap();
        table.push_column(period("2022-03-31"), cells(2.8)).unwrap();
        table
    }

    #[test]
    fn test_lookups() {
        let table = table();

        assert_eq!(
            table.get("Current Ratio", &period("2023-03-31")),
            Some(RatioValue::Value(3.0))
        );
        assert_eq!(
            table.get("Quick Ratio", &period("2022-03-31")),
            Some(RatioValue::Undefined(Undefined::MissingPriorPeriod))
        );
        assert_eq!(table.get("Unknown Ratio", &period("2023-03-31")), None);
        assert_eq!(table.get("Current Ratio", &period("2020-03-31")), None);
        assert_eq!(table.latest_period(), Some(period("2023-03-31")));
    }

    #[test]
    fn test_row_and_column() {
        let table = table();

        let row = table.row("Current Ratio").unwrap();
        assert_eq!(row.defined().collect::<Vec<_>>(), vec![3.0, 2.8]);

        let column = table.column(&period("2022-03-31")).unwrap();
        assert_eq!(column.len(), 35);
        assert_eq!(column[0], ("Current Ratio", RatioValue::Value(2.8)));
        assert_eq!(table.defined_count(), 2);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut table = ResultTable::new("ITC.NS", &available_ratios());
        let result = table.push_column(period("2023-03-31"), vec![RatioValue::Value(1.0)]);

        assert!(
            matches!(result, Err(TableError::ShapeMismatch { found: 1, .. }))
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_table_keeps_rows() {
        let table = ResultTable::new("NONE", &available_ratios());
        assert!(table.is_empty());
        assert_eq!(table.ratio_names().len(), 35);
        assert_eq!(table.defined_count(), 0);
    }

    #[test]
    fn test_display() {
        let rendered = table().to_string();

        assert!(rendered.starts_with("Financial Ratios: ITC.NS"));
        assert!(rendered.contains("2023-03-31"));
        assert!(rendered.contains("Liquidity"));
        assert!(rendered.contains("3.0000"));
        assert!(rendered.contains("2.8000"));
    }

    #[test]
    fn test_serialize_undefined_as_null() {
        let json = serde_json::to_value(table()).unwrap();

        assert_eq!(json["ticker"], "ITC.NS");
        assert_eq!(json["periods"][0], "2023-03-31");
        assert_eq!(json["rows"][0]["name"], "Current Ratio");
        assert_eq!(json["rows"][0]["category"], "Liquidity");
        assert_eq!(json["rows"][0]["values"][1], 2.8);
        assert!(json["rows"][1]["values"][0].is_null());
    }

    #[test]
    fn test_to_dataframe() {
        let df = table().to_dataframe().unwrap();

        assert_eq!(df.shape(), (35, 4));
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["ratio", "category", "2023-03-31", "2022-03-31"]);

        let latest = df.column("2023-03-31").unwrap().f64().unwrap();
        assert_eq!(latest.get(0), Some(3.0));
        assert_eq!(latest.get(1), None);
    }
}
