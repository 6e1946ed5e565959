//! Shock component: deterministic one-off scheduled events.

use super::convert;
use crate::graph::Component;
use crate::model::{FiredShock, SimulationConfig};
use crate::simulation_state::DayState;

/// Fires each enabled preset exactly once on its configured day, crediting
/// amount x severity (base currency) to the balance and recording the
/// firing in the run-level log.
#[derive(Default)]
pub struct ShockComponent {
    day_impact: f64,
    fired: Vec<FiredShock>,
}

impl Component for ShockComponent {
    fn id(&self) -> &'static str {
        "shock"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income", "expense"]
    }

    fn prepare(&mut self, day: u32, state: &DayState, config: &SimulationConfig) {
        self.day_impact = 0.0;
        self.fired.clear();

        for shock in &config.shocks {
            if !shock.enabled || shock.day != day {
                continue;
            }
            let impact = convert(
                shock.amount * shock.severity,
                shock.currency,
                config.base_currency,
                state.fx_rates,
            );
            self.day_impact += impact;
            self.fired.push(FiredShock {
                day,
                shock_id: shock.id.clone(),
                amount: impact,
            });
        }
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, _config: &SimulationConfig) {
        if self.day_impact != 0.0 {
            state.balance += self.day_impact;
            state.shock_impact += self.day_impact;
        }
        state.fired_shocks.append(&mut self.fired);
    }
}
