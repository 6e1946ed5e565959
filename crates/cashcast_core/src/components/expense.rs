//! Expense component: every expense spread evenly over the pseudo-month.

use super::convert;
use crate::graph::Component;
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;

#[derive(Default)]
pub struct ExpenseComponent {
    daily_total: f64,
}

impl Component for ExpenseComponent {
    fn id(&self) -> &'static str {
        "expense"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income"]
    }

    fn prepare(&mut self, _day: u32, state: &DayState, config: &SimulationConfig) {
        self.daily_total = 0.0;
        for expense in &config.expenses {
            self.daily_total += convert(
                expense.monthly_amount / 30.0,
                expense.currency,
                config.base_currency,
                state.fx_rates,
            );
        }
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, _config: &SimulationConfig) {
        state.balance -= self.daily_total;
        state.total_expenses += self.daily_total;
    }
}
