//! Liquidity ratios
//!
//! Short-term ability to meet obligations out of current assets and
//! operating cash.

use crate::context::{DAYS_PER_YEAR, PeriodContext, divide};
use crate::fields::LogicalField;
use crate::value::Evaluation;

/// Current assets / current liabilities.
pub fn current_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::CurrentAssets)?,
        ctx.field(LogicalField::CurrentLiabilities)?,
    )
}

/// (Cash and short-term investments + receivables) / current liabilities.
pub fn quick_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    let quick_assets = ctx.field(LogicalField::CashAndShortTermInvestments)?
        + ctx.field(LogicalField::AccountsReceivable)?;
    divide(quick_assets, ctx.field(LogicalField::CurrentLiabilities)?)
}

/// Cash and short-term investments / current liabilities.
pub fn cash_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::CashAndShortTermInvestments)?,
        ctx.field(LogicalField::CurrentLiabilities)?,
    )
}

/// Days the defensive assets (cash and receivables) cover daily cash
/// operating expenses.
pub fn defensive_interval_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    let defensive_assets = ctx.field(LogicalField::CashAndCashEquivalents)?
        + ctx.field(LogicalField::AccountsReceivable)?;
    let cash_expenses = ctx.field(LogicalField::OperatingExpense)?
        - ctx.field(LogicalField::DepreciationAndAmortization)?;
    divide(defensive_assets, cash_expenses / DAYS_PER_YEAR)
}

/// Operating cash flow / current liabilities.
pub fn operating_cash_flow_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::OperatingCashFlow)?,
        ctx.field(LogicalField::CurrentLiabilities)?,
    )
}
