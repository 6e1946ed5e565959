//! Income component: monthly streams landing on their configured day.

use super::{convert, day_in_month};
use crate::graph::Component;
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;

/// Pays each stream's full monthly amount on its day of the pseudo-month;
/// a day-of-month of zero spreads the amount evenly across all 30 days.
#[derive(Default)]
pub struct IncomeComponent {
    daily_total: f64,
}

impl Component for IncomeComponent {
    fn id(&self) -> &'static str {
        "income"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    fn prepare(&mut self, day: u32, state: &DayState, config: &SimulationConfig) {
        self.daily_total = 0.0;
        for income in &config.incomes {
            if income.day_of_month == 0 {
                self.daily_total += convert(
                    income.monthly_amount / 30.0,
                    income.currency,
                    config.base_currency,
                    state.fx_rates,
                );
            } else if day_in_month(day) == income.day_of_month {
                self.daily_total += convert(
                    income.monthly_amount,
                    income.currency,
                    config.base_currency,
                    state.fx_rates,
                );
            }
        }
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, _config: &SimulationConfig) {
        state.balance += self.daily_total;
        state.total_income += self.daily_total;
    }
}
