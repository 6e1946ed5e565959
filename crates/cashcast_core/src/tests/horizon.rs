//! Output shapes, snapshot counts, and bounds across the horizon.

use super::demo_config;
use crate::metrics::{CREDIT_SCORE_CEILING, CREDIT_SCORE_FLOOR};
use crate::simulation::simulate;

#[test]
fn one_snapshot_per_day_inclusive() {
    let result = simulate(&demo_config()).unwrap();
    assert_eq!(result.daily_snapshots.len(), 366);

    for (index, snapshot) in result.daily_snapshots.iter().enumerate() {
        assert_eq!(snapshot.day, index as u32, "days must be gapless");
    }
}

#[test]
fn minimum_horizons_work() {
    let mut config = demo_config();

    config.horizon_days = 0;
    assert_eq!(simulate(&config).unwrap().daily_snapshots.len(), 1);

    config.horizon_days = 1;
    assert_eq!(simulate(&config).unwrap().daily_snapshots.len(), 2);
}

#[test]
fn five_year_horizon_completes() {
    let mut config = demo_config();
    config.horizon_days = 1825;

    let result = simulate(&config).unwrap();
    assert_eq!(result.daily_snapshots.len(), 1826);
}

#[test]
fn weekly_snapshots_are_the_exact_subset() {
    let result = simulate(&demo_config()).unwrap();

    let expected: Vec<_> = result
        .daily_snapshots
        .iter()
        .filter(|s| s.day % 7 == 0)
        .copied()
        .collect();

    assert_eq!(result.weekly_snapshots, expected);
    assert_eq!(result.weekly_snapshots.len(), 365 / 7 + 1);
}

#[test]
fn credit_score_stays_in_bounds_every_day() {
    let result = simulate(&demo_config()).unwrap();

    for snapshot in &result.daily_snapshots {
        assert!(
            (CREDIT_SCORE_FLOOR..=CREDIT_SCORE_CEILING).contains(&snapshot.credit_score),
            "day {}: credit score {} out of bounds",
            snapshot.day,
            snapshot.credit_score
        );
    }
}

#[test]
fn summary_fields_are_well_formed() {
    let result = simulate(&demo_config()).unwrap();
    let summary = &result.summary;

    assert!((0.0..=1.0).contains(&summary.collapse_probability));
    assert!((0.0..=100.0).contains(&summary.shock_resilience_index));
    assert!(summary.final_balance.is_finite());
    assert!(summary.final_nav.is_finite());
    assert_eq!(summary.asset_ending_values.len(), 2);
    assert!(summary.asset_ending_values.contains_key("index-fund"));
    assert!(summary.asset_ending_values.contains_key("savings"));
}

#[test]
fn bands_straddle_the_expectation_for_positive_values() {
    let result = simulate(&demo_config()).unwrap();

    for snapshot in result.daily_snapshots.iter().filter(|s| s.day > 0) {
        if snapshot.balance > 0.0 {
            assert!(snapshot.balance_p5 <= snapshot.balance);
            assert!(snapshot.balance_p95 >= snapshot.balance);
        }
        if snapshot.nav > 0.0 {
            assert!(snapshot.nav_p5 <= snapshot.nav);
            assert!(snapshot.nav_p95 >= snapshot.nav);
        }
    }
}

#[test]
fn day_zero_bands_collapse_onto_the_value() {
    let result = simulate(&demo_config()).unwrap();
    let day0 = result.daily_snapshots[0];

    assert_eq!(day0.balance_p5, day0.balance);
    assert_eq!(day0.balance_p95, day0.balance);
    assert_eq!(day0.nav_p5, day0.nav);
    assert_eq!(day0.nav_p95, day0.nav);
}
