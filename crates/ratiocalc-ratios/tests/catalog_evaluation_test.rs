//! Integration tests running the full catalog over one period.

use approx::assert_relative_eq;
use ratiocalc_data::{MarketInfo, Period, PeriodSnapshot, StatementRecord};
use ratiocalc_ratios::{
    FieldResolver, LogicalField, PeriodInputs, RatioId, RatioValue, Undefined, available_ratios,
    evaluate_period,
};
use rstest::{fixture, rstest};

fn record(fields: &[(&str, f64)]) -> StatementRecord {
    fields.iter().map(|(k, v)| (*k, *v)).collect()
}

#[fixture]
fn current() -> PeriodSnapshot {
    PeriodSnapshot {
        balance_sheet: Some(record(&[
            ("Current Assets", 500.0),
            ("Current Liabilities", 250.0),
            ("Cash Cash Equivalents And Short Term Investments", 150.0),
            ("Cash And Cash Equivalents", 100.0),
            ("Accounts Receivable", 80.0),
            ("Inventory", 120.0),
            ("Accounts Payable", 60.0),
            ("Total Assets", 2000.0),
            ("Total Debt", 400.0),
            ("Stockholders Equity", 1000.0),
            ("Net PPE", 800.0),
        ])),
        income_statement: Some(record(&[
            ("Total Revenue", 1600.0),
            ("Cost Of Revenue", 1000.0),
            ("Net Income", 160.0),
            ("EBIT", 240.0),
            ("Interest Expense", 40.0),
            ("Operating Expense", 400.0),
            ("Reconciled Depreciation", 35.0),
        ])),
        cash_flow: Some(record(&[("Operating Cash Flow", 300.0)])),
    }
}

#[fixture]
fn prior() -> PeriodSnapshot {
    PeriodSnapshot {
        balance_sheet: Some(record(&[
            ("Accounts Receivable", 120.0),
            ("Inventory", 80.0),
            ("Accounts Payable", 40.0),
        ])),
        income_statement: Some(StatementRecord::new()),
        cash_flow: None,
    }
}

fn number(cells: &[RatioValue], id: RatioId) -> f64 {
    cell(cells, id).value().unwrap()
}

fn cell(cells: &[RatioValue], id: RatioId) -> RatioValue {
    let position = available_ratios().iter().position(|r| r.id == id).unwrap();
    cells[position]
}

#[rstest]
fn test_full_catalog(current: PeriodSnapshot, prior: PeriodSnapshot) {
    let resolver = FieldResolver::new();
    let info = MarketInfo::new()
        .with("trailingPE", 18.5)
        .with("payoutRatio", 0.4);
    let inputs = PeriodInputs {
        period: Period::from_ymd(2023, 12, 31).unwrap(),
        current: &current,
        prior: Some(&prior),
        market: Some(&info),
        resolver: &resolver,
    };

    let catalog = available_ratios();
    let cells = evaluate_period(&catalog, &inputs);
    assert_eq!(cells.len(), catalog.len());

    assert_eq!(cell(&cells, RatioId::CurrentRatio), RatioValue::Value(2.0));
    assert_eq!(
        cell(&cells, RatioId::InventoryTurnover),
        RatioValue::Value(10.0)
    );
    assert_relative_eq!(number(&cells, RatioId::DaysOfInventoryOnHand), 36.5);
    assert_relative_eq!(number(&cells, RatioId::ReceivablesTurnover), 16.0);
    assert_relative_eq!(
        number(&cells, RatioId::DaysOfSalesOutstanding),
        365.0 / 16.0
    );

    let npm = number(&cells, RatioId::NetProfitMargin);
    let tat = number(&cells, RatioId::TotalAssetTurnover);
    let fl = number(&cells, RatioId::FinancialLeverage);
    let dupont = number(&cells, RatioId::DupontRoe);
    let roe = number(&cells, RatioId::ReturnOnEquity);
    assert_relative_eq!(dupont, npm * tat * fl, max_relative = 1e-9);
    assert_relative_eq!(dupont, roe, max_relative = 1e-9);

    assert_eq!(
        cell(&cells, RatioId::PriceToEarnings),
        RatioValue::Value(18.5)
    );
    assert_relative_eq!(number(&cells, RatioId::RetentionRate), 0.6);
    assert!(!cell(&cells, RatioId::PriceToBook).is_defined());
}

#[rstest]
fn test_without_prior_or_market(current: PeriodSnapshot) {
    let resolver = FieldResolver::new();
    let inputs = PeriodInputs {
        period: Period::from_ymd(2023, 12, 31).unwrap(),
        current: &current,
        prior: None,
        market: None,
        resolver: &resolver,
    };

    let catalog = available_ratios();
    let cells = evaluate_period(&catalog, &inputs);

    for (definition, value) in catalog.iter().zip(&cells) {
        if definition.requires_prior {
            let name = definition.name();
            assert!(!value.is_defined(), "{name} should be undefined");
        }
    }
    assert_eq!(
        cell(&cells, RatioId::InventoryTurnover).reason(),
        Some(Undefined::MissingPriorPeriod)
    );
    assert_eq!(
        cell(&cells, RatioId::DaysOfInventoryOnHand).reason(),
        Some(Undefined::UndefinedInput(RatioId::InventoryTurnover))
    );
    assert_eq!(
        cell(&cells, RatioId::DividendYield).reason(),
        Some(Undefined::NotApplicable)
    );
    assert_eq!(cell(&cells, RatioId::CurrentRatio), RatioValue::Value(2.0));
}

#[rstest]
fn test_custom_alias_changes_resolution(current: PeriodSnapshot) {
    let mut current = current;
    if let Some(bs) = current.balance_sheet.as_mut() {
        bs.insert("Borrowings", Some(1000.0));
    }
    let resolver = FieldResolver::new().with_aliases(LogicalField::TotalDebt, ["Borrowings"]);
    let inputs = PeriodInputs {
        period: Period::from_ymd(2023, 12, 31).unwrap(),
        current: &current,
        prior: None,
        market: None,
        resolver: &resolver,
    };

    let cells = evaluate_period(&available_ratios(), &inputs);
    assert_relative_eq!(number(&cells, RatioId::DebtToAssets), 0.5);
}
