//! DuPont decomposition
//!
//! ROE = net profit margin x total asset turnover x financial leverage. The
//! components are read from the cells already computed for the same period,
//! never recomputed from raw fields.

use crate::context::PeriodContext;
use crate::registry::RatioId;
use crate::value::Evaluation;

/// Net profit margin component.
pub fn net_profit_margin(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.ratio(RatioId::NetProfitMargin)
}

/// Total asset turnover component.
pub fn asset_turnover(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.ratio(RatioId::TotalAssetTurnover)
}

/// Financial leverage component.
pub fn financial_leverage(ctx: &PeriodContext<'_>) -> Evaluation {
    ctx.ratio(RatioId::FinancialLeverage)
}

/// Product of the three components.
pub fn roe(ctx: &PeriodContext<'_>) -> Evaluation {
    Ok(ctx.ratio(RatioId::DupontNetProfitMargin)?
        * ctx.ratio(RatioId::DupontAssetTurnover)?
        * ctx.ratio(RatioId::DupontFinancialLeverage)?)
}
