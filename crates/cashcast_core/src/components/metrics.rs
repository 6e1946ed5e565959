//! Metrics component: daily credit-score update.

use crate::graph::Component;
use crate::metrics::update_credit_score;
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;

/// Runs last in the graph. Skipped entirely on day 0, which keeps the
/// fixed starting score.
#[derive(Default)]
pub struct MetricsComponent;

impl Component for MetricsComponent {
    fn id(&self) -> &'static str {
        "metrics"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income", "expense", "debt", "asset", "shock"]
    }

    fn prepare(&mut self, _day: u32, _state: &DayState, _config: &SimulationConfig) {}

    fn apply(&mut self, day: u32, state: &mut DayState, config: &SimulationConfig) {
        if day == 0 {
            return;
        }

        let total_debts = state.total_debts(config);
        let nav = state.nav(config);
        let debt_ratio = if nav > 0.0 { total_debts / nav } else { 1.0 };

        state.credit_score =
            update_credit_score(state.credit_score, debt_ratio, state.missed_payments, day);
    }
}
