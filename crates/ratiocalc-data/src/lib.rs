#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ratiocalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod market;
pub mod period;
pub mod source;
pub mod statement;
pub mod store;

pub use error::{DataError, Result};
pub use market::MarketInfo;
pub use period::Period;
pub use source::{Fundamentals, FundamentalsSource, StatementTable, StaticSource};
pub use statement::{PeriodSnapshot, StatementKind, StatementRecord};
pub use store::{StatementStore, StatementStoreBuilder};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
