#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ratiocalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod summary;
pub mod table;

pub use summary::{HealthScore, NEUTRAL_SCORE, RatioScore};
pub use table::{Result, ResultRow, ResultTable, TableError};
