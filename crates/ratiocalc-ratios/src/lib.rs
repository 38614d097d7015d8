#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ratiocalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod context;
pub mod fields;
pub mod formulas;
pub mod registry;
pub mod value;

pub use context::{DAYS_PER_YEAR, PeriodContext, PeriodInputs, divide, evaluate_period};
pub use fields::{FieldResolver, LogicalField, MarketField};
pub use registry::{
    Direction, Formula, RatioCategory, RatioDefinition, RatioId, available_ratios,
    count_by_category, get_ratio_info, list_ratio_names, ratio_map, ratios_by_category,
};
pub use value::{Evaluation, RatioValue, Undefined};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
