//! Income/expense timing and FX realization at transaction-day rates.

use super::{empty_config, expense, income};
use crate::model::{Currency, FxRates, RuntimeOptions};
use crate::simulation::{simulate, simulate_with_options};

#[test]
fn flows_convert_at_transaction_day_rates() {
    let mut config = empty_config(0, 0.0);
    config.incomes.push(income("eur-salary", 3_000.0, Currency::Eur, 1));
    config.expenses.push(expense("usd-rent", 3_000.0, Currency::Usd));

    let mut options = RuntimeOptions::default();
    options.fx_rates_by_day.insert(
        0,
        FxRates {
            eur: 2.0,
            pkr: 280.0,
        },
    );

    let result = simulate_with_options(&config, &options, None).unwrap();

    // Day 0: income 3000 EUR at EUR=2 -> 1500 USD, expense 3000/30 = 100 USD
    assert!((result.daily_snapshots[0].balance - 1_400.0).abs() < 1e-6);
}

#[test]
fn income_lands_only_on_its_day_of_month() {
    let mut config = empty_config(59, 0.0);
    config.incomes.push(income("salary", 3_000.0, Currency::Usd, 15));

    let result = simulate(&config).unwrap();

    // Day 14 is day-of-month 15; fires once per 30-day pseudo-month
    assert_eq!(result.daily_snapshots[13].balance, 0.0);
    assert_eq!(result.daily_snapshots[14].balance, 3_000.0);
    assert_eq!(result.daily_snapshots[43].balance, 3_000.0);
    assert_eq!(result.daily_snapshots[44].balance, 6_000.0);
}

#[test]
fn day_of_month_zero_spreads_evenly() {
    let mut config = empty_config(29, 0.0);
    config.incomes.push(income("stream", 3_000.0, Currency::Eur, 0));
    config.fx.base_rates.eur = 2.0;

    let result = simulate(&config).unwrap();

    // 100 EUR/day -> 50 USD/day over a full pseudo-month
    assert!((result.daily_snapshots[0].balance - 50.0).abs() < 1e-9);
    assert!((result.summary.final_balance - 1_500.0).abs() < 1e-9);
}

#[test]
fn expenses_always_spread_regardless_of_configuration() {
    let mut config = empty_config(29, 3_000.0);
    config.expenses.push(expense("rent", 3_000.0, Currency::Usd));

    let result = simulate(&config).unwrap();

    assert!((result.daily_snapshots[0].balance - 2_900.0).abs() < 1e-9);
    assert!(result.summary.final_balance.abs() < 1e-9);
}
