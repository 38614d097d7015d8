//! Profitability ratios
//!
//! Returns on sales, assets and capital.

use crate::context::{PeriodContext, divide};
use crate::fields::LogicalField;
use crate::value::Evaluation;

/// Net income / total revenue.
pub fn net_profit_margin(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::NetIncome)?,
        ctx.field(LogicalField::TotalRevenue)?,
    )
}

/// Net income / total assets.
pub fn return_on_assets(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::NetIncome)?,
        ctx.field(LogicalField::TotalAssets)?,
    )
}

/// Net income / total equity.
pub fn return_on_equity(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::NetIncome)?,
        ctx.field(LogicalField::TotalEquity)?,
    )
}

/// EBIT / (total debt + total equity).
pub fn return_on_total_capital(ctx: &PeriodContext<'_>) -> Evaluation {
    let capital = ctx.field(LogicalField::TotalDebt)? + ctx.field(LogicalField::TotalEquity)?;
    divide(ctx.field(LogicalField::Ebit)?, capital)
}

/// Net income / common shareholders' equity.
pub fn return_on_common_equity(ctx: &PeriodContext<'_>) -> Evaluation {
    divide(
        ctx.field(LogicalField::NetIncome)?,
        ctx.field(LogicalField::CommonEquity)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::test_support::{eval, snapshot};
    use crate::value::Undefined;
    use approx::assert_relative_eq;
    use ratiocalc_data::StatementKind;

    #[test]
    fn test_returns() {
        let current = snapshot(
            &[
                ("Total Assets", 1000.0),
                ("Total Debt", 100.0),
                ("Total Equity Gross Minority Interest", 500.0),
                ("Common Stock Equity", 400.0),
            ],
            &[
                ("Total Revenue", 800.0),
                ("Net Income", 80.0),
                ("Operating Income", 120.0),
            ],
            &[],
        );

        assert_relative_eq!(
            eval(net_profit_margin, &current, None, None, &[]).unwrap(),
            0.1
        );
        assert_relative_eq!(
            eval(return_on_assets, &current, None, None, &[]).unwrap(),
            0.08
        );
        assert_relative_eq!(
            eval(return_on_equity, &current, None, None, &[]).unwrap(),
            0.16
        );
        assert_relative_eq!(
            eval(return_on_total_capital, &current, None, None, &[]).unwrap(),
            0.2
        );
        assert_relative_eq!(
            eval(return_on_common_equity, &current, None, None, &[]).unwrap(),
            0.2
        );
    }

    #[test]
    fn test_common_equity_falls_back_to_total_equity() {
        let current = snapshot(
            &[("Total Equity Gross Minority Interest", 500.0)],
            &[("Net Income", 50.0)],
            &[],
        );
        assert_relative_eq!(
            eval(return_on_common_equity, &current, None, None, &[]).unwrap(),
            0.1
        );
    }

    #[test]
    fn test_missing_income_statement() {
        let mut current = snapshot(&[("Total Assets", 1000.0)], &[], &[]);
        current.income_statement = None;
        assert_eq!(
            eval(return_on_assets, &current, None, None, &[]),
            Err(Undefined::MissingStatement(StatementKind::IncomeStatement))
        );
    }
}
