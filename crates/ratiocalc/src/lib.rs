#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ratiocalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aligner;
pub mod analyzer;
pub mod config;
pub mod error;

// Re-export main types from sub-crates
pub use ratiocalc_data as data;
pub use ratiocalc_output as output;
pub use ratiocalc_ratios as ratios;

pub use aligner::{Alignment, PeriodAligner};
pub use analyzer::{Analysis, RatioAnalyzer, load_store};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
