//! Identical inputs must produce bit-identical outputs.

use super::demo_config;
use crate::simulation::simulate;

#[test]
fn repeated_runs_are_bit_identical() {
    let config = demo_config();
    let first = simulate(&config).unwrap();
    let second = simulate(&config).unwrap();

    assert_eq!(first.daily_snapshots.len(), second.daily_snapshots.len());
    // DaySnapshot is PartialEq over raw f64s, so this is bit-exact equality
    assert_eq!(first.daily_snapshots, second.daily_snapshots);
    assert_eq!(first.weekly_snapshots, second.weekly_snapshots);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.fired_shocks, second.fired_shocks);
}

#[test]
fn determinism_holds_over_three_runs() {
    let config = demo_config();
    let results = [
        simulate(&config).unwrap(),
        simulate(&config).unwrap(),
        simulate(&config).unwrap(),
    ];

    for result in &results[1..] {
        assert_eq!(result.summary.final_balance, results[0].summary.final_balance);
        assert_eq!(result.summary.final_nav, results[0].summary.final_nav);
        assert_eq!(result.summary.vibe_tier, results[0].summary.vibe_tier);
    }
}

#[test]
fn different_inputs_produce_different_outputs() {
    let config = demo_config();
    let mut modified = demo_config();
    modified.starting_cash += 10_000.0;

    let base = simulate(&config).unwrap();
    let other = simulate(&modified).unwrap();

    assert_ne!(base.summary.final_balance, other.summary.final_balance);
}
