//! Logical fields and provider alias resolution.
//!
//! Providers are not consistent about line item names: the same receivables
//! figure shows up as "Accounts Receivable", "Receivables" or "Net
//! Receivables" depending on ticker and market. Each logical field therefore
//! carries an ordered alias chain, and resolution takes the first alias with a
//! usable value.

use crate::value::Undefined;
use ratiocalc_data::{MarketInfo, PeriodSnapshot, StatementKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A canonical statement line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogicalField {
    /// Total current assets
    CurrentAssets,
    /// Total current liabilities
    CurrentLiabilities,
    /// Cash, cash equivalents and short-term investments
    CashAndShortTermInvestments,
    /// Cash and cash equivalents
    CashAndCashEquivalents,
    /// Trade receivables
    AccountsReceivable,
    /// Inventory
    Inventory,
    /// Trade payables
    AccountsPayable,
    /// Total assets
    TotalAssets,
    /// Total debt
    TotalDebt,
    /// Total equity including minority interest
    TotalEquity,
    /// Common shareholders' equity
    CommonEquity,
    /// Net property, plant and equipment
    NetPpe,
    /// Total revenue
    TotalRevenue,
    /// Cost of revenue (COGS)
    CostOfRevenue,
    /// Net income attributable to the company
    NetIncome,
    /// Earnings before interest and taxes
    Ebit,
    /// Interest expense
    InterestExpense,
    /// Operating expense
    OperatingExpense,
    /// Depreciation and amortization reported in the income statement
    DepreciationAndAmortization,
    /// Cash flow from operating activities
    OperatingCashFlow,
}

impl LogicalField {
    /// Every logical field.
    pub const ALL: [Self; 20] = [
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::CashAndShortTermInvestments,
        Self::CashAndCashEquivalents,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::AccountsPayable,
        Self::TotalAssets,
        Self::TotalDebt,
        Self::TotalEquity,
        Self::CommonEquity,
        Self::NetPpe,
        Self::TotalRevenue,
        Self::CostOfRevenue,
        Self::NetIncome,
        Self::Ebit,
        Self::InterestExpense,
        Self::OperatingExpense,
        Self::DepreciationAndAmortization,
        Self::OperatingCashFlow,
    ];

    /// Statement that reports this field.
    pub const fn statement(&self) -> StatementKind {
        match self {
            Self::CurrentAssets
            | Self::CurrentLiabilities
            | Self::CashAndShortTermInvestments
            | Self::CashAndCashEquivalents
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::AccountsPayable
            | Self::TotalAssets
            | Self::TotalDebt
            | Self::TotalEquity
            | Self::CommonEquity
            | Self::NetPpe => StatementKind::BalanceSheet,
            Self::TotalRevenue
            | Self::CostOfRevenue
            | Self::NetIncome
            | Self::Ebit
            | Self::InterestExpense
            | Self::OperatingExpense
            | Self::DepreciationAndAmortization => StatementKind::IncomeStatement,
            Self::OperatingCashFlow => StatementKind::CashFlow,
        }
    }

    /// Built-in provider aliases, most preferred first.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::CurrentAssets => &["Current Assets", "Total Current Assets"],
            Self::CurrentLiabilities => &["Current Liabilities", "Total Current Liabilities"],
            Self::CashAndShortTermInvestments => &[
                "Cash Cash Equivalents And Short Term Investments",
                "Cash And Short Term Investments",
            ],
            Self::CashAndCashEquivalents => &["Cash And Cash Equivalents", "Cash"],
            Self::AccountsReceivable => &["Accounts Receivable", "Receivables", "Net Receivables"],
            Self::Inventory => &["Inventory", "Inventories"],
            Self::AccountsPayable => &["Accounts Payable", "Payables"],
            Self::TotalAssets => &["Total Assets"],
            Self::TotalDebt => &["Total Debt"],
            Self::TotalEquity => &[
                "Total Equity Gross Minority Interest",
                "Stockholders Equity",
                "Total Stockholder Equity",
            ],
            Self::CommonEquity => &[
                "Common Stock Equity",
                "Stockholders Equity",
                "Total Equity Gross Minority Interest",
            ],
            Self::NetPpe => &["Net PPE", "Net Property Plant And Equipment"],
            Self::TotalRevenue => &["Total Revenue", "Operating Revenue"],
            Self::CostOfRevenue => &["Cost Of Revenue", "Reconciled Cost Of Revenue"],
            Self::NetIncome => &[
                "Net Income From Continuing Operation Net Minority Interest",
                "Net Income",
                "Net Income Common Stockholders",
            ],
            Self::Ebit => &["EBIT", "Operating Income"],
            Self::InterestExpense => &["Interest Expense", "Interest Expense Non Operating"],
            Self::OperatingExpense => &["Operating Expense", "Total Operating Expenses"],
            Self::DepreciationAndAmortization => &[
                "Depreciation And Amortization In Income Statement",
                "Depreciation Amortization Depletion Income Statement",
                "Reconciled Depreciation",
            ],
            Self::OperatingCashFlow => &[
                "Operating Cash Flow",
                "Cash Flow From Continuing Operating Activities",
            ],
        }
    }

    /// Canonical display name (the preferred alias).
    pub const fn label(&self) -> &'static str {
        self.aliases()[0]
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A numeric entry of the provider's market info mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarketField {
    /// Last traded price
    CurrentPrice,
    /// Trailing price-to-earnings
    TrailingPe,
    /// Price-to-book
    PriceToBook,
    /// Trailing twelve-month price-to-sales
    PriceToSales,
    /// Trailing annual dividend yield
    DividendYield,
    /// Dividend payout ratio
    PayoutRatio,
    /// Trailing operating cash flow
    OperatingCashflow,
    /// Shares outstanding
    SharesOutstanding,
}

impl MarketField {
    /// Info keys to try, most preferred first.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::CurrentPrice => &["currentPrice", "regularMarketPrice"],
            Self::TrailingPe => &["trailingPE"],
            Self::PriceToBook => &["priceToBook"],
            Self::PriceToSales => &["priceToSalesTrailing12Months"],
            Self::DividendYield => &["trailingAnnualDividendYield", "dividendYield"],
            Self::PayoutRatio => &["payoutRatio"],
            Self::OperatingCashflow => &["operatingCashflow"],
            Self::SharesOutstanding => &["sharesOutstanding"],
        }
    }
}

impl fmt::Display for MarketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases()[0])
    }
}

/// Resolves logical fields against statement snapshots.
///
/// Extra aliases can be prepended per field when the resolver is built; after
/// that the chains are fixed for the lifetime of the resolver.
#[derive(Debug, Clone, Default)]
pub struct FieldResolver {
    overrides: BTreeMap<LogicalField, Vec<String>>,
}

impl FieldResolver {
    /// Resolver with the built-in alias chains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Try `aliases` (in order) before the built-in chain of `field`.
    pub fn with_aliases<I, S>(mut self, field: LogicalField, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides
            .entry(field)
            .or_default()
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Full alias chain for a field, custom aliases first.
    pub fn aliases(&self, field: LogicalField) -> impl Iterator<Item = &str> {
        self.overrides
            .get(&field)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .chain(field.aliases().iter().copied())
    }

    /// Resolve a field, also reporting which raw alias supplied the value.
    pub fn resolve_alias(
        &self,
        field: LogicalField,
        snapshot: &PeriodSnapshot,
    ) -> Option<(&str, f64)> {
        let record = snapshot.statement(field.statement())?;
        self.aliases(field)
            .find_map(|alias| record.value(alias).map(|value| (alias, value)))
    }

    /// Resolve a field to its first usable value, or `None` if it is missing.
    pub fn resolve(&self, field: LogicalField, snapshot: &PeriodSnapshot) -> Option<f64> {
        self.resolve_alias(field, snapshot).map(|(_, value)| value)
    }

    /// Resolve a field, explaining why it is unavailable.
    ///
    /// # Errors
    ///
    /// [`Undefined::MissingStatement`] if the owning statement is absent,
    /// otherwise [`Undefined::MissingField`] if no alias has a usable value.
    pub fn lookup(&self, field: LogicalField, snapshot: &PeriodSnapshot) -> Result<f64, Undefined> {
        if !snapshot.has(field.statement()) {
            return Err(Undefined::MissingStatement(field.statement()));
        }
        self.resolve(field, snapshot)
            .ok_or(Undefined::MissingField(field))
    }

    /// Resolve a market info field.
    pub fn resolve_market(&self, field: MarketField, info: &MarketInfo) -> Option<f64> {
        field.aliases().iter().find_map(|key| info.number(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratiocalc_data::StatementRecord;

    fn balance_sheet(fields: &[(&str, f64)]) -> PeriodSnapshot {
        PeriodSnapshot {
            balance_sheet: Some(fields.iter().map(|(k, v)| (*k, *v)).collect()),
            ..PeriodSnapshot::default()
        }
    }

    #[test]
    fn test_first_alias_wins() {
        let snapshot = balance_sheet(&[("Receivables", 40.0), ("Accounts Receivable", 50.0)]);
        let resolver = FieldResolver::new();

        assert_eq!(
            resolver.resolve_alias(LogicalField::AccountsReceivable, &snapshot),
            Some(("Accounts Receivable", 50.0))
        );
    }

    #[test]
    fn test_falls_back_past_null_alias() {
        let mut record = StatementRecord::new();
        record.insert("Accounts Receivable", None);
        record.insert("Net Receivables", Some(45.0));
        let snapshot = PeriodSnapshot {
            balance_sheet: Some(record),
            ..PeriodSnapshot::default()
        };

        let resolver = FieldResolver::new();
        assert_eq!(
            resolver.resolve_alias(LogicalField::AccountsReceivable, &snapshot),
            Some(("Net Receivables", 45.0))
        );
    }

    #[test]
    fn test_missing_field_and_statement() {
        let resolver = FieldResolver::new();
        let snapshot = balance_sheet(&[("Total Assets", 100.0)]);

        assert_eq!(
            resolver.lookup(LogicalField::TotalDebt, &snapshot),
            Err(Undefined::MissingField(LogicalField::TotalDebt))
        );
        assert_eq!(
            resolver.lookup(LogicalField::TotalRevenue, &snapshot),
            Err(Undefined::MissingStatement(StatementKind::IncomeStatement))
        );
        assert_eq!(
            resolver.resolve(LogicalField::TotalRevenue, &snapshot),
            None
        );
    }

    #[test]
    fn test_custom_aliases_take_precedence() {
        let snapshot = balance_sheet(&[("Total Debt", 10.0), ("Borrowings", 12.0)]);
        let resolver = FieldResolver::new().with_aliases(LogicalField::TotalDebt, ["Borrowings"]);

        assert_eq!(
            resolver.resolve(LogicalField::TotalDebt, &snapshot),
            Some(12.0)
        );
        assert_eq!(
            resolver.aliases(LogicalField::TotalDebt).collect::<Vec<_>>(),
            vec!["Borrowings", "Total Debt"]
        );
    }

    #[test]
    fn test_every_field_has_aliases() {
        for field in LogicalField::ALL {
            assert!(!field.aliases().is_empty(), "{field:?} has no aliases");
        }
    }

    #[test]
    fn test_market_aliases() {
        let resolver = FieldResolver::new();
        let info = MarketInfo::new().with("dividendYield", 0.031);

        assert_eq!(
            resolver.resolve_market(MarketField::DividendYield, &info),
            Some(0.031)
        );
        assert_eq!(
            resolver.resolve_market(MarketField::TrailingPe, &info),
            None
        );
    }
}
