//! Interest accrual, scheduled payments, and missed-payment tracking.

use super::empty_config;
use crate::model::{Currency, Debt};
use crate::simulation::simulate;

fn debt(principal: f64, apr: f64, min_payment: f64) -> Debt {
    Debt {
        id: "loan".to_string(),
        name: "Loan".to_string(),
        principal,
        currency: Currency::Usd,
        apr,
        min_payment,
        missed_payments: 0,
    }
}

#[test]
fn interest_accrues_and_payment_lands_on_month_start() {
    let mut config = empty_config(0, 100.0);
    // APR of 36.5% gives an exact daily rate of 0.1%
    config.debts.push(debt(1_000.0, 0.365, 50.0));

    let result = simulate(&config).unwrap();

    // Day 0 is a payment day: principal 1000 + 1 interest - 50 payment = 951
    // NAV = (100 - 50) - 951 = -901
    assert!((result.summary.final_balance - 50.0).abs() < 1e-9);
    assert!((result.summary.final_nav - (-901.0)).abs() < 1e-9);
}

#[test]
fn unaffordable_payment_is_skipped_and_counted() {
    let mut config = empty_config(0, 10.0);
    config.debts.push(debt(1_000.0, 0.365, 50.0));

    let result = simulate(&config).unwrap();

    // Payment skipped: balance untouched, interest still accrues
    assert!((result.summary.final_balance - 10.0).abs() < 1e-9);
    assert!((result.summary.final_nav - (10.0 - 1_001.0)).abs() < 1e-9);
}

#[test]
fn missed_payments_drag_the_credit_score() {
    let mut paying = empty_config(10, 50_000.0);
    paying.debts.push(debt(5_000.0, 0.18, 200.0));

    let mut missing = empty_config(10, 0.0);
    missing.debts.push(debt(5_000.0, 0.18, 200.0));

    let paid = simulate(&paying).unwrap();
    let missed = simulate(&missing).unwrap();

    assert!(
        missed.summary.final_credit_score < paid.summary.final_credit_score,
        "missed payments must cost score: {} vs {}",
        missed.summary.final_credit_score,
        paid.summary.final_credit_score
    );
    assert!(missed.summary.final_credit_score >= 300.0);
}

#[test]
fn principal_never_goes_negative() {
    // Minimum payment far above the remaining principal
    let mut config = empty_config(89, 10_000.0);
    config.debts.push(debt(100.0, 0.0, 5_000.0));

    let result = simulate(&config).unwrap();

    // Day 0 clears the debt (payment capped at principal+interest); NAV must
    // never dip below balance afterwards.
    for snapshot in &result.daily_snapshots {
        assert!(
            snapshot.nav >= snapshot.balance - 1e-9,
            "day {}: nav {} below balance {} implies negative principal",
            snapshot.day,
            snapshot.nav,
            snapshot.balance
        );
    }
    assert!((result.summary.final_balance - 9_900.0).abs() < 1e-9);
}
