//! Mutable per-day state and its lifecycle.
//!
//! One [`DayState`] exists per simulated day. It is built once from the
//! configuration, then deep-cloned (copy-on-write) before each subsequent
//! day's mutation; the prior day survives only inside its emitted snapshot.
//!
//! The per-id maps use `FxHashMap` for lookups, but no computation ever
//! iterates them directly: every order-sensitive sum walks the
//! configuration `Vec`s, keeping results independent of hash ordering.

use rustc_hash::FxHashMap;

use crate::analysis::QuantileBand;
use crate::metrics::STARTING_CREDIT_SCORE;
use crate::model::{AssetLot, DaySnapshot, FiredShock, FxRates, RuntimeOptions, SimulationConfig};

/// Mutable state accumulator for a single day.
#[derive(Debug, Clone)]
pub struct DayState {
    pub day: u32,
    /// Cash balance in the base currency.
    pub balance: f64,
    /// Asset id -> current value (asset currency).
    pub assets: FxHashMap<String, f64>,
    /// Debt id -> current principal (debt currency).
    pub debts: FxHashMap<String, f64>,
    /// Asset id -> cost-basis lots, oldest first.
    pub asset_lots: FxHashMap<String, Vec<AssetLot>>,
    pub fx_rates: FxRates,
    pub credit_score: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_debt_payments: f64,
    pub missed_payments: u32,
    pub realized_gains: f64,
    pub taxes_paid: f64,
    pub shock_impact: f64,
    /// Run-level log of fired shocks, harvested by the orchestrator after
    /// the daily loop.
    pub fired_shocks: Vec<FiredShock>,
}

impl DayState {
    /// Build the day-0 state from the configuration.
    ///
    /// Lots default to a single tranche whose cost basis equals the asset's
    /// value, unless explicitly overridden through [`RuntimeOptions`].
    pub fn from_config(config: &SimulationConfig, options: &RuntimeOptions) -> Self {
        let mut assets = FxHashMap::default();
        let mut asset_lots = FxHashMap::default();
        for asset in &config.assets {
            assets.insert(asset.id.clone(), asset.value);

            let lots = match options.initial_asset_lots.get(&asset.id) {
                Some(overridden) if !overridden.is_empty() => overridden.clone(),
                _ => vec![AssetLot {
                    cost_basis: asset.value,
                    value: asset.value,
                }],
            };
            asset_lots.insert(asset.id.clone(), lots);
        }

        let mut debts = FxHashMap::default();
        for debt in &config.debts {
            debts.insert(debt.id.clone(), debt.principal);
        }

        Self {
            day: 0,
            balance: config.starting_cash,
            assets,
            debts,
            asset_lots,
            fx_rates: config.fx.base_rates,
            credit_score: STARTING_CREDIT_SCORE,
            total_income: 0.0,
            total_expenses: 0.0,
            total_debt_payments: 0.0,
            missed_payments: 0,
            realized_gains: 0.0,
            taxes_paid: 0.0,
            shock_impact: 0.0,
            fired_shocks: Vec::new(),
        }
    }

    /// Total asset value, summed in configuration order.
    pub fn total_assets(&self, config: &SimulationConfig) -> f64 {
        config
            .assets
            .iter()
            .map(|a| self.assets.get(&a.id).copied().unwrap_or(0.0))
            .sum()
    }

    /// Total debt principal, summed in configuration order.
    pub fn total_debts(&self, config: &SimulationConfig) -> f64 {
        config
            .debts
            .iter()
            .map(|d| self.debts.get(&d.id).copied().unwrap_or(0.0))
            .sum()
    }

    /// Net asset value: balance + assets - debts.
    pub fn nav(&self, config: &SimulationConfig) -> f64 {
        self.balance + self.total_assets(config) - self.total_debts(config)
    }

    /// Convert this state into the day's output snapshot.
    pub fn to_snapshot(
        &self,
        config: &SimulationConfig,
        balance_band: QuantileBand,
        nav_band: QuantileBand,
    ) -> DaySnapshot {
        DaySnapshot {
            day: self.day,
            balance: self.balance,
            nav: self.nav(config),
            credit_score: self.credit_score,
            balance_p5: balance_band.p5,
            balance_p95: balance_band.p95,
            nav_p5: nav_band.p5,
            nav_p95: nav_band.p95,
        }
    }
}
