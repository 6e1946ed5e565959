//! Simulation output types
//!
//! A run produces one [`DaySnapshot`] per day (0..=horizon), a weekly subset
//! for persistence, a fired-shock log, and a [`SimulationSummary`] derived
//! from the final state and the full snapshot history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::SimulationConfig;

/// Per-day snapshot of financial state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySnapshot {
    pub day: u32,
    pub balance: f64,
    /// Net asset value: balance + assets - debts.
    pub nav: f64,
    pub credit_score: f64,
    pub balance_p5: f64,
    pub balance_p95: f64,
    pub nav_p5: f64,
    pub nav_p95: f64,
}

/// Qualitative financial-health tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibeTier {
    Thriving,
    Stable,
    Stressed,
    Crisis,
    Collapse,
}

/// Record of a shock that fired, with its base-currency impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiredShock {
    pub day: u32,
    pub shock_id: String,
    pub amount: f64,
}

/// Aggregated run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSummary {
    pub final_balance: f64,
    pub final_balance_p5: f64,
    pub final_balance_p95: f64,
    #[serde(rename = "finalNAV")]
    pub final_nav: f64,
    #[serde(rename = "finalNAVP5")]
    pub final_nav_p5: f64,
    #[serde(rename = "finalNAVP95")]
    pub final_nav_p95: f64,
    pub final_credit_score: f64,
    /// Heuristic collapse risk index in [0, 1].
    pub collapse_probability: f64,
    /// First deficit day, reported only when the longest streak reached 90.
    pub collapse_day: Option<u32>,
    /// Shock Resilience Index (0-100).
    pub shock_resilience_index: f64,
    /// Fired shocks normalized to a 30-day rate.
    pub shock_clustering_density: f64,
    /// Mean absolute base-currency magnitude of fired shocks.
    pub shock_intensity_average: f64,
    /// Mean balance increase on days immediately following a deficit day.
    pub recovery_slope: f64,
    pub vibe_tier: VibeTier,
    pub liquidity_ratio: f64,
    pub deficit_days: u32,
    pub taxes_paid: f64,
    pub realized_gains: f64,
    /// Ending asset values keyed by asset id (sorted for stable output).
    pub asset_ending_values: BTreeMap<String, f64>,
}

/// Full simulation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Echo of the configuration the run was built from.
    pub config: SimulationConfig,
    pub summary: SimulationSummary,
    /// Daily snapshots at full resolution; in-memory only.
    pub daily_snapshots: Vec<DaySnapshot>,
    /// Every 7th day, for persistence.
    pub weekly_snapshots: Vec<DaySnapshot>,
    pub fired_shocks: Vec<FiredShock>,
    /// Wall-clock duration of the run in milliseconds. Not covered by the
    /// determinism guarantee.
    pub compute_time_ms: f64,
}

/// Deltas isolating the effect of shocks (without-shocks minus actual).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterfactualInsights {
    pub balance_delta_no_shocks_vs_actual: f64,
    pub nav_delta_no_shocks_vs_actual: f64,
}

/// Paired actual / no-shocks runs of the same configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterfactualResult {
    pub with_shocks: SimulationResult,
    pub without_shocks: SimulationResult,
    pub insights: CounterfactualInsights,
}
