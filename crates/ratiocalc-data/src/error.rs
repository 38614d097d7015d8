//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while building statement data.
///
/// Missing line items and missing statements are not errors: they surface
/// later as undefined ratio cells. Only structurally invalid input ends up
/// here.
#[derive(Debug, Error)]
pub enum DataError {
    /// A period identifier could not be parsed as a date
    #[error("Invalid period identifier: {0}")]
    InvalidPeriod(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing data
    #[error("Missing data for {symbol}: {reason}")]
    MissingData {
        /// Symbol that was queried
        symbol: String,
        /// Reason for missing data
        reason: String,
    },
}
