//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `determinism` - bit-identical repeated runs
//! - `horizon` - snapshot counts, weekly downsampling, output bounds
//! - `cash_flow` - income/expense timing and FX realization
//! - `debt` - interest accrual, payments, missed-payment tracking
//! - `liquidation` - eligibility, ordering, FIFO gains
//! - `taxes` - monthly levy on income and realized gains
//! - `shocks` - firing schedule and severity scaling
//! - `counterfactual` - no-shocks pairing and insight deltas
//! - `serde_surface` - camelCase JSON field names and round-trips

mod cash_flow;
mod debt;
mod determinism;
mod horizon;

use crate::model::{
    Asset, AssetClass, Currency, Debt, Expense, FxConfig, FxRates, IncomeStream, ShockPreset,
    SimulationConfig, TaxBracket,
};

/// A representative scenario: salary and freelance income, rent and
/// groceries, one credit card, two liquid assets, progressive brackets, and
/// a handful of shocks over one year.
pub fn demo_config() -> SimulationConfig {
    SimulationConfig {
        name: "Demo".to_string(),
        horizon_days: 365,
        base_currency: Currency::Usd,
        fx: FxConfig {
            base_rates: FxRates {
                eur: 0.9,
                pkr: 280.0,
            },
            volatility: 0.15,
        },
        starting_cash: 5_000.0,
        incomes: vec![
            income("salary", 4_000.0, Currency::Usd, 1),
            income("freelance", 450.0, Currency::Eur, 0),
        ],
        expenses: vec![
            expense("rent", 1_500.0, Currency::Usd),
            expense("groceries", 600.0, Currency::Usd),
        ],
        debts: vec![Debt {
            id: "card".to_string(),
            name: "Credit Card".to_string(),
            principal: 2_000.0,
            currency: Currency::Usd,
            apr: 0.18,
            min_payment: 100.0,
            missed_payments: 0,
        }],
        assets: vec![
            asset("index-fund", AssetClass::IndexFund, 10_000.0, 0.07, 0.15),
            asset("savings", AssetClass::Savings, 3_000.0, 0.02, 0.01),
        ],
        tax_brackets: vec![
            bracket(0.0, 1_000.0, 0.10),
            bracket(1_000.0, 5_000.0, 0.20),
            bracket(5_000.0, f64::INFINITY, 0.30),
        ],
        shocks: vec![
            shock("car-repair", 45, -800.0, true),
            shock("bonus", 100, 1_000.0, true),
            shock("medical", 200, -1_200.0, true),
            shock("layoff", 300, -4_000.0, false),
        ],
        cash_reserve_ratio: 0.10,
    }
}

/// An empty scenario skeleton for targeted tests; zero FX volatility and no
/// entities anywhere.
pub fn empty_config(horizon_days: u32, starting_cash: f64) -> SimulationConfig {
    SimulationConfig {
        name: "Test".to_string(),
        horizon_days,
        base_currency: Currency::Usd,
        fx: FxConfig {
            base_rates: FxRates {
                eur: 1.0,
                pkr: 280.0,
            },
            volatility: 0.0,
        },
        starting_cash,
        incomes: Vec::new(),
        expenses: Vec::new(),
        debts: Vec::new(),
        assets: Vec::new(),
        tax_brackets: Vec::new(),
        shocks: Vec::new(),
        cash_reserve_ratio: 0.0,
    }
}

pub fn income(id: &str, monthly_amount: f64, currency: Currency, day_of_month: u32) -> IncomeStream {
    IncomeStream {
        id: id.to_string(),
        name: id.to_string(),
        monthly_amount,
        currency,
        day_of_month,
    }
}

pub fn expense(id: &str, monthly_amount: f64, currency: Currency) -> Expense {
    Expense {
        id: id.to_string(),
        name: id.to_string(),
        monthly_amount,
        currency,
        essential: true,
    }
}

pub fn asset(
    id: &str,
    class: AssetClass,
    value: f64,
    expected_return: f64,
    volatility: f64,
) -> Asset {
    Asset {
        id: id.to_string(),
        name: id.to_string(),
        class,
        value,
        currency: Currency::Usd,
        expected_return,
        volatility,
        sale_penalty: 0.01,
        liquidity_delay_days: 0,
        locked: false,
    }
}

pub fn bracket(floor: f64, ceiling: f64, rate: f64) -> TaxBracket {
    TaxBracket {
        floor,
        ceiling,
        rate,
    }
}

pub fn shock(id: &str, day: u32, amount: f64, enabled: bool) -> ShockPreset {
    ShockPreset {
        id: id.to_string(),
        name: id.to_string(),
        day,
        amount,
        currency: Currency::Usd,
        enabled,
        severity: 1.0,
    }
}
