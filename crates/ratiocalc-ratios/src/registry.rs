//! Ratio Registry
//!
//! The fixed ratio catalog. Catalog order is reporting order and evaluation
//! order: a derived ratio always follows the ratios it reads.

use crate::context::PeriodContext;
use crate::formulas::{activity, dupont, liquidity, market, profitability, solvency};
use crate::value::{Evaluation, RatioValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Signature shared by every ratio formula.
pub type Formula = fn(&PeriodContext<'_>) -> Evaluation;

/// Identifier of a catalog ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatioId {
    /// Current Ratio
    CurrentRatio,
    /// Quick Ratio
    QuickRatio,
    /// Cash Ratio
    CashRatio,
    /// Defensive Interval Ratio
    DefensiveIntervalRatio,
    /// Operating Cash Flow Ratio
    OperatingCashFlowRatio,
    /// Debt-to-Assets Ratio
    DebtToAssets,
    /// Debt-to-Equity Ratio
    DebtToEquity,
    /// Financial Leverage Ratio
    FinancialLeverage,
    /// Interest Coverage Ratio
    InterestCoverage,
    /// Cash Flow to Debt Ratio
    CashFlowToDebt,
    /// Net Profit Margin
    NetProfitMargin,
    /// Return on Assets (ROA)
    ReturnOnAssets,
    /// Return on Equity (ROE)
    ReturnOnEquity,
    /// Return on Total Capital (ROTC)
    ReturnOnTotalCapital,
    /// Return on Common Equity (ROCE)
    ReturnOnCommonEquity,
    /// Inventory Turnover
    InventoryTurnover,
    /// Days of Inventory on Hand (DOH)
    DaysOfInventoryOnHand,
    /// Receivables Turnover
    ReceivablesTurnover,
    /// Days of Sales Outstanding (DSO)
    DaysOfSalesOutstanding,
    /// Payables Turnover
    PayablesTurnover,
    /// Number of Days of Payables
    DaysOfPayables,
    /// Working Capital Turnover
    WorkingCapitalTurnover,
    /// Fixed Asset Turnover
    FixedAssetTurnover,
    /// Total Asset Turnover
    TotalAssetTurnover,
    /// DuPont Net Profit Margin
    DupontNetProfitMargin,
    /// DuPont Asset Turnover
    DupontAssetTurnover,
    /// DuPont Financial Leverage
    DupontFinancialLeverage,
    /// DuPont ROE
    DupontRoe,
    /// Price to Earnings (P/E)
    PriceToEarnings,
    /// Price to Book (P/B)
    PriceToBook,
    /// Price to Sales (P/S)
    PriceToSales,
    /// Price to Cash Flow (P/CF)
    PriceToCashFlow,
    /// Dividend Yield
    DividendYield,
    /// Dividend Payout Ratio
    DividendPayoutRatio,
    /// Retention Rate
    RetentionRate,
}

impl RatioId {
    /// Every ratio, in catalog order.
    pub const ALL: [Self; 35] = [
        Self::CurrentRatio,
        Self::QuickRatio,
        Self::CashRatio,
        Self::DefensiveIntervalRatio,
        Self::OperatingCashFlowRatio,
        Self::DebtToAssets,
        Self::DebtToEquity,
        Self::FinancialLeverage,
        Self::InterestCoverage,
        Self::CashFlowToDebt,
        Self::NetProfitMargin,
        Self::ReturnOnAssets,
        Self::ReturnOnEquity,
        Self::ReturnOnTotalCapital,
        Self::ReturnOnCommonEquity,
        Self::InventoryTurnover,
        Self::DaysOfInventoryOnHand,
        Self::ReceivablesTurnover,
        Self::DaysOfSalesOutstanding,
        Self::PayablesTurnover,
        Self::DaysOfPayables,
        Self::WorkingCapitalTurnover,
        Self::FixedAssetTurnover,
        Self::TotalAssetTurnover,
        Self::DupontNetProfitMargin,
        Self::DupontAssetTurnover,
        Self::DupontFinancialLeverage,
        Self::DupontRoe,
        Self::PriceToEarnings,
        Self::PriceToBook,
        Self::PriceToSales,
        Self::PriceToCashFlow,
        Self::DividendYield,
        Self::DividendPayoutRatio,
        Self::RetentionRate,
    ];

    /// Row label of the ratio.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "Current Ratio",
            Self::QuickRatio => "Quick Ratio",
            Self::CashRatio => "Cash Ratio",
            Self::DefensiveIntervalRatio => "Defensive Interval Ratio",
            Self::OperatingCashFlowRatio => "Operating Cash Flow Ratio",
            Self::DebtToAssets => "Debt-to-Assets Ratio",
            Self::DebtToEquity => "Debt-to-Equity Ratio",
            Self::FinancialLeverage => "Financial Leverage Ratio",
            Self::InterestCoverage => "Interest Coverage Ratio",
            Self::CashFlowToDebt => "Cash Flow to Debt Ratio",
            Self::NetProfitMargin => "Net Profit Margin",
            Self::ReturnOnAssets => "Return on Assets (ROA)",
            Self::ReturnOnEquity => "Return on Equity (ROE)",
            Self::ReturnOnTotalCapital => "Return on Total Capital (ROTC)",
            Self::ReturnOnCommonEquity => "Return on Common Equity (ROCE)",
            Self::InventoryTurnover => "Inventory Turnover",
            Self::DaysOfInventoryOnHand => "Days of Inventory on Hand (DOH)",
            Self::ReceivablesTurnover => "Receivables Turnover",
            Self::DaysOfSalesOutstanding => "Days of Sales Outstanding (DSO)",
            Self::PayablesTurnover => "Payables Turnover",
            Self::DaysOfPayables => "Number of Days of Payables",
            Self::WorkingCapitalTurnover => "Working Capital Turnover",
            Self::FixedAssetTurnover => "Fixed Asset Turnover",
            Self::TotalAssetTurnover => "Total Asset Turnover",
            Self::DupontNetProfitMargin => "DuPont Net Profit Margin",
            Self::DupontAssetTurnover => "DuPont Asset Turnover",
            Self::DupontFinancialLeverage => "DuPont Financial Leverage",
            Self::DupontRoe => "DuPont ROE",
            Self::PriceToEarnings => "Price to Earnings (P/E)",
            Self::PriceToBook => "Price to Book (P/B)",
            Self::PriceToSales => "Price to Sales (P/S)",
            Self::PriceToCashFlow => "Price to Cash Flow (P/CF)",
            Self::DividendYield => "Dividend Yield",
            Self::DividendPayoutRatio => "Dividend Payout Ratio",
            Self::RetentionRate => "Retention Rate",
        }
    }
}

impl fmt::Display for RatioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Available ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Short-term obligations (current, quick, cash ratios)
    Liquidity,
    /// Capital structure and debt service
    Solvency,
    /// Returns on sales, assets and capital
    Profitability,
    /// Turnover and days ratios
    Activity,
    /// Three-factor ROE decomposition
    DuPont,
    /// Point-in-time market ratios
    Market,
}

impl RatioCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Liquidity,
        Self::Solvency,
        Self::Profitability,
        Self::Activity,
        Self::DuPont,
        Self::Market,
    ];

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Liquidity => "Liquidity",
            Self::Solvency => "Solvency",
            Self::Profitability => "Profitability",
            Self::Activity => "Activity",
            Self::DuPont => "DuPont",
            Self::Market => "Market",
        }
    }
}

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a ratio improves, used when scoring against history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Larger values are healthier
    HigherIsBetter,
    /// Smaller values are healthier
    LowerIsBetter,
    /// Not scored
    Neutral,
}

/// Ratio metadata and computation rule
#[derive(Debug, Clone, Copy)]
pub struct RatioDefinition {
    /// Ratio identifier
    pub id: RatioId,
    /// Ratio category
    pub category: RatioCategory,
    /// Brief description of what the ratio measures
    pub description: &'static str,
    /// Whether the ratio averages over the prior period
    pub requires_prior: bool,
    /// Preferred direction
    pub direction: Direction,
    /// Ratios of the same period this one is derived from
    pub inputs: &'static [RatioId],
    /// Formula
    pub rule: Formula,
}

impl RatioDefinition {
    /// Row label of the ratio.
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Evaluate the ratio; non-finite results become undefined.
    pub fn evaluate(&self, ctx: &PeriodContext<'_>) -> RatioValue {
        RatioValue::from((self.rule)(ctx))
    }
}

/// Get all available ratios, in catalog order
pub fn available_ratios() -> Vec<RatioDefinition> {
    vec![
        // Liquidity ratios
        RatioDefinition {
            id: RatioId::CurrentRatio,
            category: RatioCategory::Liquidity,
            description: "Current assets over current liabilities",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: liquidity::current_ratio,
        },
        RatioDefinition {
            id: RatioId::QuickRatio,
            category: RatioCategory::Liquidity,
            description: "Cash, short-term investments and receivables over current liabilities",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: liquidity::quick_ratio,
        },
        RatioDefinition {
            id: RatioId::CashRatio,
            category: RatioCategory::Liquidity,
            description: "Cash and short-term investments over current liabilities",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: liquidity::cash_ratio,
        },
        RatioDefinition {
            id: RatioId::DefensiveIntervalRatio,
            category: RatioCategory::Liquidity,
            description: "Days of cash operating expenses covered by cash and receivables",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: liquidity::defensive_interval_ratio,
        },
        RatioDefinition {
            id: RatioId::OperatingCashFlowRatio,
            category: RatioCategory::Liquidity,
            description: "Operating cash flow over current liabilities",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: liquidity::operating_cash_flow_ratio,
        },
        // Solvency ratios
        RatioDefinition {
            id: RatioId::DebtToAssets,
            category: RatioCategory::Solvency,
            description: "Total debt over total assets",
            requires_prior: false,
            direction: Direction::LowerIsBetter,
            inputs: &[],
            rule: solvency::debt_to_assets,
        },
        RatioDefinition {
            id: RatioId::DebtToEquity,
            category: RatioCategory::Solvency,
            description: "Total debt over total equity",
            requires_prior: false,
            direction: Direction::LowerIsBetter,
            inputs: &[],
            rule: solvency::debt_to_equity,
        },
        RatioDefinition {
            id: RatioId::FinancialLeverage,
            category: RatioCategory::Solvency,
            description: "Total assets over total equity",
            requires_prior: false,
            direction: Direction::LowerIsBetter,
            inputs: &[],
            rule: solvency::financial_leverage,
        },
        RatioDefinition {
            id: RatioId::InterestCoverage,
            category: RatioCategory::Solvency,
            description: "EBIT over interest expense",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: solvency::interest_coverage,
        },
        RatioDefinition {
            id: RatioId::CashFlowToDebt,
            category: RatioCategory::Solvency,
            description: "Operating cash flow over total debt",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: solvency::cash_flow_to_debt,
        },
        // Profitability ratios
        RatioDefinition {
            id: RatioId::NetProfitMargin,
            category: RatioCategory::Profitability,
            description: "Net income over total revenue",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: profitability::net_profit_margin,
        },
        RatioDefinition {
            id: RatioId::ReturnOnAssets,
            category: RatioCategory::Profitability,
            description: "Net income over total assets",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: profitability::return_on_assets,
        },
        RatioDefinition {
            id: RatioId::ReturnOnEquity,
            category: RatioCategory::Profitability,
            description: "Net income over total equity",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: profitability::return_on_equity,
        },
        RatioDefinition {
            id: RatioId::ReturnOnTotalCapital,
            category: RatioCategory::Profitability,
            description: "EBIT over total debt plus total equity",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: profitability::return_on_total_capital,
        },
        RatioDefinition {
            id: RatioId::ReturnOnCommonEquity,
            category: RatioCategory::Profitability,
            description: "Net income over common shareholders' equity",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: profitability::return_on_common_equity,
        },
        // Activity ratios
        RatioDefinition {
            id: RatioId::InventoryTurnover,
            category: RatioCategory::Activity,
            description: "Cost of revenue over average inventory",
            requires_prior: true,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::inventory_turnover,
        },
        RatioDefinition {
            id: RatioId::DaysOfInventoryOnHand,
            category: RatioCategory::Activity,
            description: "365 over inventory turnover",
            requires_prior: true,
            direction: Direction::LowerIsBetter,
            inputs: &[RatioId::InventoryTurnover],
            rule: activity::days_of_inventory_on_hand,
        },
        RatioDefinition {
            id: RatioId::ReceivablesTurnover,
            category: RatioCategory::Activity,
            description: "Total revenue over average receivables",
            requires_prior: true,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::receivables_turnover,
        },
        RatioDefinition {
            id: RatioId::DaysOfSalesOutstanding,
            category: RatioCategory::Activity,
            description: "365 over receivables turnover",
            requires_prior: true,
            direction: Direction::LowerIsBetter,
            inputs: &[RatioId::ReceivablesTurnover],
            rule: activity::days_of_sales_outstanding,
        },
        RatioDefinition {
            id: RatioId::PayablesTurnover,
            category: RatioCategory::Activity,
            description: "Cost of revenue over average payables",
            requires_prior: true,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::payables_turnover,
        },
        RatioDefinition {
            id: RatioId::DaysOfPayables,
            category: RatioCategory::Activity,
            description: "365 over payables turnover",
            requires_prior: true,
            direction: Direction::LowerIsBetter,
            inputs: &[RatioId::PayablesTurnover],
            rule: activity::days_of_payables,
        },
        RatioDefinition {
            id: RatioId::WorkingCapitalTurnover,
            category: RatioCategory::Activity,
            description: "Total revenue over working capital",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::working_capital_turnover,
        },
        RatioDefinition {
            id: RatioId::FixedAssetTurnover,
            category: RatioCategory::Activity,
            description: "Total revenue over net PP&E",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::fixed_asset_turnover,
        },
        RatioDefinition {
            id: RatioId::TotalAssetTurnover,
            category: RatioCategory::Activity,
            description: "Total revenue over total assets",
            requires_prior: false,
            direction: Direction::HigherIsBetter,
            inputs: &[],
            rule: activity::total_asset_turnover,
        },
        // DuPont decomposition
        RatioDefinition {
            id: RatioId::DupontNetProfitMargin,
            category: RatioCategory::DuPont,
            description: "Net profit margin component of ROE",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[RatioId::NetProfitMargin],
            rule: dupont::net_profit_margin,
        },
        RatioDefinition {
            id: RatioId::DupontAssetTurnover,
            category: RatioCategory::DuPont,
            description: "Total asset turnover component of ROE",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[RatioId::TotalAssetTurnover],
            rule: dupont::asset_turnover,
        },
        RatioDefinition {
            id: RatioId::DupontFinancialLeverage,
            category: RatioCategory::DuPont,
            description: "Financial leverage component of ROE",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[RatioId::FinancialLeverage],
            rule: dupont::financial_leverage,
        },
        RatioDefinition {
            id: RatioId::DupontRoe,
            category: RatioCategory::DuPont,
            description: "Product of the three DuPont components",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[
                RatioId::DupontNetProfitMargin,
                RatioId::DupontAssetTurnover,
                RatioId::DupontFinancialLeverage,
            ],
            rule: dupont::roe,
        },
        // Market ratios
        RatioDefinition {
            id: RatioId::PriceToEarnings,
            category: RatioCategory::Market,
            description: "Trailing price to earnings",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::price_to_earnings,
        },
        RatioDefinition {
            id: RatioId::PriceToBook,
            category: RatioCategory::Market,
            description: "Price to book value",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::price_to_book,
        },
        RatioDefinition {
            id: RatioId::PriceToSales,
            category: RatioCategory::Market,
            description: "Price to trailing twelve-month sales",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::price_to_sales,
        },
        RatioDefinition {
            id: RatioId::PriceToCashFlow,
            category: RatioCategory::Market,
            description: "Price over operating cash flow per share",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::price_to_cash_flow,
        },
        RatioDefinition {
            id: RatioId::DividendYield,
            category: RatioCategory::Market,
            description: "Trailing annual dividend yield",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::dividend_yield,
        },
        RatioDefinition {
            id: RatioId::DividendPayoutRatio,
            category: RatioCategory::Market,
            description: "Share of earnings paid out as dividends",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::dividend_payout_ratio,
        },
        RatioDefinition {
            id: RatioId::RetentionRate,
            category: RatioCategory::Market,
            description: "Share of earnings retained (1 - payout ratio)",
            requires_prior: false,
            direction: Direction::Neutral,
            inputs: &[],
            rule: market::retention_rate,
        },
    ]
}

/// Get ratios by category
pub fn ratios_by_category(category: RatioCategory) -> Vec<RatioDefinition> {
    available_ratios()
        .into_iter()
        .filter(|r| r.category == category)
        .collect()
}

/// Get ratio info by row label
pub fn get_ratio_info(name: &str) -> Option<RatioDefinition> {
    available_ratios().into_iter().find(|r| r.name() == name)
}

/// Get a map of all ratios indexed by row label
pub fn ratio_map() -> HashMap<&'static str, RatioDefinition> {
    available_ratios()
        .into_iter()
        .map(|r| (r.name(), r))
        .collect()
}

/// List all ratio names
pub fn list_ratio_names() -> Vec<&'static str> {
    available_ratios().into_iter().map(|r| r.name()).collect()
}

/// Count ratios by category
pub fn count_by_category() -> HashMap<RatioCategory, usize> {
    let mut counts = HashMap::new();
    for ratio in available_ratios() {
        *counts.entry(ratio.category).or_insert(0) += 1;
    }
    counts
}
