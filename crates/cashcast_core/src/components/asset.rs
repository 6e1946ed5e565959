//! Asset component: daily valuation drift and liquidation under deficit.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use super::convert;
use crate::graph::Component;
use crate::liquidation::consume_lots_fifo;
use crate::model::{Asset, SimulationConfig};
use crate::simulation_state::DayState;

/// Applies expected-return drift to unlocked assets, then sells eligible
/// assets FIFO-by-lot while the balance stays negative.
///
/// Liquidation is flagged when the balance is negative or below one-tenth of
/// the required cash reserve (total asset value x reserve ratio).
pub struct AssetComponent {
    liquidation_order: Vec<String>,
    /// Parallel to `config.assets`.
    valuation_changes: Vec<f64>,
    liquidation_needed: bool,
}

impl AssetComponent {
    pub fn new(liquidation_order: Vec<String>) -> Self {
        Self {
            liquidation_order,
            valuation_changes: Vec::new(),
            liquidation_needed: false,
        }
    }

    /// Eligible assets (unlocked, zero liquidity delay) in sale order:
    /// explicit priority list first, then ascending sale penalty, then
    /// ascending id.
    fn sellable<'a>(&self, config: &'a SimulationConfig) -> Vec<&'a Asset> {
        let priority: FxHashMap<&str, usize> = self
            .liquidation_order
            .iter()
            .enumerate()
            .map(|(index, id)| (id.as_str(), index))
            .collect();

        let mut sellable: Vec<&Asset> = config
            .assets
            .iter()
            .filter(|a| !a.locked && a.liquidity_delay_days == 0)
            .collect();

        sellable.sort_by(|a, b| {
            let rank_a = priority.get(a.id.as_str()).copied().unwrap_or(usize::MAX);
            let rank_b = priority.get(b.id.as_str()).copied().unwrap_or(usize::MAX);
            rank_a
                .cmp(&rank_b)
                .then_with(|| {
                    a.sale_penalty
                        .partial_cmp(&b.sale_penalty)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.id.cmp(&b.id))
        });

        sellable
    }
}

impl Component for AssetComponent {
    fn id(&self) -> &'static str {
        "asset"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income", "expense", "debt"]
    }

    fn prepare(&mut self, _day: u32, state: &DayState, config: &SimulationConfig) {
        self.valuation_changes.clear();
        for asset in &config.assets {
            let change = if asset.locked {
                0.0
            } else {
                let value = state.assets.get(&asset.id).copied().unwrap_or(0.0);
                value * asset.expected_return / 365.0
            };
            self.valuation_changes.push(change);
        }

        let required_reserve = state.total_assets(config) * config.cash_reserve_ratio;
        self.liquidation_needed = state.balance < 0.0 || state.balance < required_reserve * 0.1;
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, config: &SimulationConfig) {
        for (asset, change) in config.assets.iter().zip(&self.valuation_changes) {
            let value = state.assets.get(&asset.id).copied().unwrap_or(0.0);
            state.assets.insert(asset.id.clone(), value + change);
        }

        if !self.liquidation_needed || state.balance >= 0.0 {
            return;
        }

        for asset in self.sellable(config) {
            if state.balance >= 0.0 {
                break;
            }
            let current_value = state.assets.get(&asset.id).copied().unwrap_or(0.0);
            if current_value <= 0.0 {
                continue;
            }

            // Size the sale to the remaining deficit, net of the penalty
            // haircut, capped at the full holding.
            let deficit_base = state.balance.abs();
            let available_net_base = convert(
                current_value * (1.0 - asset.sale_penalty),
                asset.currency,
                config.base_currency,
                state.fx_rates,
            );
            let proceeds_base = available_net_base.min(deficit_base);
            let proceeds_in_asset = convert(
                proceeds_base,
                config.base_currency,
                asset.currency,
                state.fx_rates,
            );
            let sell_amount =
                current_value.min(proceeds_in_asset / (1.0 - asset.sale_penalty).max(1e-9));
            let proceeds = sell_amount * (1.0 - asset.sale_penalty);

            let cost_basis_sold = {
                let lots = state.asset_lots.entry(asset.id.clone()).or_default();
                consume_lots_fifo(lots, sell_amount)
            };

            let realized_gain = proceeds - cost_basis_sold;
            let realized_gain_base = convert(
                realized_gain,
                asset.currency,
                config.base_currency,
                state.fx_rates,
            );

            state
                .assets
                .insert(asset.id.clone(), current_value - sell_amount);
            state.balance += convert(
                proceeds,
                asset.currency,
                config.base_currency,
                state.fx_rates,
            );
            state.realized_gains += realized_gain_base;
        }
    }
}
