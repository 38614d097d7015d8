//! Market ratios
//!
//! Pass-through of the provider's point-in-time market info. These are only
//! defined for the period that carries market data.

use crate::context::{PeriodContext, divide};
use crate::fields::MarketField;
use crate::value::Evaluation;

/// Trailing P/E.
pub fn price_to_earnings(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.market(MarketField::TrailingPe)
}

/// Price to book.
pub fn price_to_book(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.market(MarketField::PriceToBook)
}

/// Trailing twelve-month price to sales.
pub fn price_to_sales(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.market(MarketField::PriceToSales)
}

/// Price / operating cash flow per share.
pub fn price_to_cash_flow(ctx: &PeriodContext<'_>) -> Evaluation {
    let price = ctx.market(MarketField::CurrentPrice)?;
    let cash_flow_per_share = divide(
        ctx.market(MarketField::OperatingCashflow)?,
        ctx.market(MarketField::SharesOutstanding)?,
    )?;
    divide(price, cash_flow_per_share)
}

/// Trailing annual dividend yield.
pub fn dividend_yield(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.market(MarketField::DividendYield)
}

/// Dividend payout ratio.
pub fn dividend_payout_ratio(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.market(MarketField::PayoutRatio)
}

/// Share of earnings retained: 1 - payout ratio.
pub fn retention_rate(ctx: &PeriodContext<'_>) -> Evaluation {
    Ok(1.0 - ctx.market(MarketField::PayoutRatio)?)
}
