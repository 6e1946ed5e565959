//! The daily simulation loop and run summary.
//!
//! `simulate` builds the component set, sorts it once, then walks day
//! 0..=horizon: clone the prior state, run every component in order
//! (prepare then apply, one component at a time), emit a snapshot. The
//! summary and the counterfactual variant are derived afterwards.
//!
//! Every invocation is self-contained: no shared mutable state, no I/O, and
//! identical configurations always produce bit-identical snapshot sequences.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::analysis::{
    collapse_probability, composite_volatility, quantile_bands, recovery_slope,
    shock_clustering_density, shock_intensity_average,
};
use crate::components::build_components;
use crate::error::Result;
use crate::graph::topological_sort;
use crate::metrics::{compute_rsi, compute_vibe_tier};
use crate::model::{
    CounterfactualInsights, CounterfactualResult, RuntimeOptions, SimulationConfig,
    SimulationResult, SimulationSummary,
};
use crate::simulation_state::DayState;

/// Days between progress notifications.
const PROGRESS_INTERVAL: u32 = 50;

/// Progress callback: (current day, total days).
pub type ProgressFn = dyn FnMut(u32, u32) + Send;

/// Run a full deterministic simulation with default runtime options.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult> {
    simulate_with_options(config, &RuntimeOptions::default(), None)
}

/// Run a full deterministic simulation.
///
/// `options` carries test/replay overrides (pinned FX rates, explicit lots,
/// liquidation priority); `on_progress` is invoked every 50 days with
/// (day, horizon).
pub fn simulate_with_options(
    config: &SimulationConfig,
    options: &RuntimeOptions,
    mut on_progress: Option<&mut ProgressFn>,
) -> Result<SimulationResult> {
    let started = Instant::now();

    let mut components = build_components(options);
    let order = topological_sort(&components)?;

    let horizon = config.horizon_days;
    let mut prior = DayState::from_config(config, options);

    let mut daily_snapshots = Vec::with_capacity(horizon as usize + 1);
    let mut weekly_snapshots = Vec::new();

    let mut deficit_days = 0u32;
    let mut consecutive_deficit = 0u32;
    let mut max_deficit_streak = 0u32;

    let volatility = composite_volatility(&config.assets);

    for day in 0..=horizon {
        // Copy-on-write: the prior day survives only inside its snapshot.
        let mut state = prior.clone();
        state.day = day;

        for &index in &order {
            let component = &mut components[index];
            component.prepare(day, &state, config);
            component.apply(day, &mut state, config);
        }

        if state.balance < 0.0 {
            deficit_days += 1;
            consecutive_deficit += 1;
            max_deficit_streak = max_deficit_streak.max(consecutive_deficit);
        } else {
            consecutive_deficit = 0;
        }

        let balance_band = quantile_bands(state.balance, day, volatility);
        let nav_band = quantile_bands(state.nav(config), day, volatility);
        let snapshot = state.to_snapshot(config, balance_band, nav_band);

        daily_snapshots.push(snapshot);
        if day % 7 == 0 {
            weekly_snapshots.push(snapshot);
        }

        if day % PROGRESS_INTERVAL == 0
            && let Some(callback) = on_progress.as_mut()
        {
            callback(day, horizon);
        }

        prior = state;
    }

    let state = prior;
    let final_snapshot = daily_snapshots[daily_snapshots.len() - 1];

    let total_assets = state.total_assets(config);
    let nav = state.nav(config);

    let liquidity_ratio = if total_assets > 0.0 {
        state.balance / (state.balance + total_assets)
    } else if state.balance > 0.0 {
        1.0
    } else {
        0.0
    };
    let debt_service_ratio = if state.total_income > 0.0 {
        state.total_debt_payments / state.total_income
    } else {
        0.0
    };

    let collapse_day = if max_deficit_streak >= 90 {
        daily_snapshots
            .iter()
            .position(|s| s.balance < 0.0)
            .map(|index| index as u32)
    } else {
        None
    };

    let asset_ending_values: BTreeMap<String, f64> = config
        .assets
        .iter()
        .map(|a| (a.id.clone(), state.assets.get(&a.id).copied().unwrap_or(0.0)))
        .collect();

    let summary = SimulationSummary {
        final_balance: final_snapshot.balance,
        final_balance_p5: final_snapshot.balance_p5,
        final_balance_p95: final_snapshot.balance_p95,
        final_nav: final_snapshot.nav,
        final_nav_p5: final_snapshot.nav_p5,
        final_nav_p95: final_snapshot.nav_p95,
        final_credit_score: state.credit_score,
        collapse_probability: collapse_probability(
            liquidity_ratio,
            debt_service_ratio,
            consecutive_deficit,
            state.credit_score,
        ),
        collapse_day,
        shock_resilience_index: compute_rsi(
            liquidity_ratio,
            debt_service_ratio,
            state.credit_score,
            deficit_days,
        ),
        shock_clustering_density: shock_clustering_density(state.fired_shocks.len(), horizon),
        shock_intensity_average: shock_intensity_average(&state.fired_shocks),
        recovery_slope: recovery_slope(&daily_snapshots),
        vibe_tier: compute_vibe_tier(
            state.balance,
            nav,
            state.credit_score,
            deficit_days,
            liquidity_ratio,
        ),
        liquidity_ratio,
        deficit_days,
        taxes_paid: state.taxes_paid,
        realized_gains: state.realized_gains,
        asset_ending_values,
    };

    Ok(SimulationResult {
        config: config.clone(),
        summary,
        daily_snapshots,
        weekly_snapshots,
        fired_shocks: state.fired_shocks,
        compute_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Run the configured simulation and its no-shocks counterfactual, and
/// report the final balance/NAV deltas between the two.
///
/// The two runs share no mutable state; with the `parallel` feature they
/// execute concurrently. Progress is reported for the actual run only.
pub fn simulate_counterfactual(
    config: &SimulationConfig,
    options: &RuntimeOptions,
    on_progress: Option<&mut ProgressFn>,
) -> Result<CounterfactualResult> {
    let no_shock_config = config.without_shocks();

    #[cfg(feature = "parallel")]
    let (with_shocks, without_shocks) = {
        let (with_shocks, without_shocks) = rayon::join(
            move || simulate_with_options(config, options, on_progress),
            || simulate_with_options(&no_shock_config, options, None),
        );
        (with_shocks?, without_shocks?)
    };

    #[cfg(not(feature = "parallel"))]
    let (with_shocks, without_shocks) = (
        simulate_with_options(config, options, on_progress)?,
        simulate_with_options(&no_shock_config, options, None)?,
    );

    let insights = CounterfactualInsights {
        balance_delta_no_shocks_vs_actual: without_shocks.summary.final_balance
            - with_shocks.summary.final_balance,
        nav_delta_no_shocks_vs_actual: without_shocks.summary.final_nav
            - with_shocks.summary.final_nav,
    };

    Ok(CounterfactualResult {
        with_shocks,
        without_shocks,
        insights,
    })
}
