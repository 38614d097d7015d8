//! Activity ratios
//!
//! How efficiently working capital and long-lived assets turn into sales.
//! The turnover ratios on inventory, receivables and payables use the
//! average balance of the current and prior period, so they are undefined
//! for the earliest period of the history.

use crate::context::{DAYS_PER_YEAR, PeriodContext, divide};
use crate::fields::LogicalField;
use crate::registry::RatioId;
use crate::value::Evaluation;

fn days(turnover: f64) -> Evaluation {
    divide(DAYS_PER_YEAR, turnover)
}

/// Cost of revenue / average inventory.
pub fn inventory_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::CostOfRevenue)?,
        ctx.average(LogicalField::Inventory)?,
    )
}

/// 365 / inventory turnover.
pub fn days_of_inventory_on_hand(ctx: &PeriodContext<'_>) -> Evaluation {
    days(ctx.ratio(RatioId::InventoryTurnover)?)
}

/// Total revenue / average receivables.
pub fn receivables_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalRevenue)?,
        ctx.average(LogicalField::AccountsReceivable)?,
    )
}

/// 365 / receivables turnover.
pub fn days_of_sales_outstanding(ctx: &PeriodContext<'_>) -> Evaluation {
    days(ctx.ratio(RatioId::ReceivablesTurnover)?)
}

/// Cost of revenue / average payables.
pub fn payables_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::CostOfRevenue)?,
        ctx.average(LogicalField::AccountsPayable)?,
    )
}

/// 365 / payables turnover.
pub fn days_of_payables(ctx: &PeriodContext<'_>) -> Evaluation {
    days(ctx.ratio(RatioId::PayablesTurnover)?)
}

/// Total revenue / (current assets - current liabilities).
pub fn working_capital_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    let working_capital =
        ctx.field(LogicalField::CurrentAssets)? - ctx.field(LogicalField::CurrentLiabilities)?;
    divide(ctx.field(LogicalField::TotalRevenue)?, working_capital)
}

/// Total revenue / net PP&E.
pub fn fixed_asset_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalRevenue)?,
        ctx.field(LogicalField::NetPpe)?,
    )
}

/// Total revenue / total assets.
pub fn total_asset_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalRevenue)?,
        ctx.field(LogicalField::TotalAssets)?,
    )
}
