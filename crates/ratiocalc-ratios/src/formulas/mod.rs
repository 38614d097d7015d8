//! Ratio formulas, one module per category.
//!
//! Every formula has the signature of [`Formula`](crate::registry::Formula):
//! it reads inputs through a [`PeriodContext`](crate::context::PeriodContext)
//! and propagates the first [`Undefined`](crate::value::Undefined) reason
//! with `?`.

pub mod activity;
pub mod dupont;
pub mod liquidity;
pub mod market;
pub mod profitability;
pub mod solvency;
