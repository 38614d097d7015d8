//! Solvency ratios
//!
//! Capital structure and the ability to service debt.

use crate::context::{PeriodContext, divide};
use crate::fields::LogicalField;
use crate::value::Evaluation;

/// Total debt / total assets.
pub fn debt_to_assets(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalDebt)?,
        ctx.field(LogicalField::TotalAssets)?,
    )
}

/// Total debt / total equity.
pub fn debt_to_equity(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalDebt)?,
        ctx.field(LogicalField::TotalEquity)?,
    )
}

/// Total assets / total equity.
pub fn financial_leverage(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::TotalAssets)?,
        ctx.field(LogicalField::TotalEquity)?,
    )
}

/// EBIT / interest expense.
pub fn interest_coverage(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::Ebit)?,
        ctx.field(LogicalField::InterestExpense)?,
    )
}

/// Operating cash flow / total debt.
pub fn cash_flow_to_debt(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::OperatingCashFlow)?,
        ctx.field(LogicalField::TotalDebt)?,
    )
}
