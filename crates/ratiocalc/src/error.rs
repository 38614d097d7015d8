//! Error types for analysis runs.

use chrono::NaiveDate;
use ratiocalc_data::DataError;
use ratiocalc_output::TableError;
use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Hard failures of an analysis run.
///
/// Per-cell problems never end up here; they are undefined cells of the
/// result table.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The configured start date is after the end date
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Configured start
        start: NaiveDate,
        /// Configured end
        end: NaiveDate,
    },

    /// Statement data error
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Result table assembly error
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}
