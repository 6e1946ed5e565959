//! Tax component: monthly progressive levy on income and realized gains.

use super::day_in_month;
use crate::graph::Component;
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;
use crate::taxes::progressive_tax;

/// Fires on the 30th day of each pseudo-month, taxing the income accrued and
/// net positive gains realized since the previous levy.
#[derive(Default)]
pub struct TaxComponent {
    tax_due: f64,
    last_taxed_income: f64,
    last_taxed_gains: f64,
}

impl Component for TaxComponent {
    fn id(&self) -> &'static str {
        "tax"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income", "expense", "debt", "asset"]
    }

    fn prepare(&mut self, day: u32, state: &DayState, config: &SimulationConfig) {
        self.tax_due = 0.0;

        if day_in_month(day) != 30 {
            return;
        }

        let monthly_income = state.total_income - self.last_taxed_income;
        let monthly_gains = (state.realized_gains - self.last_taxed_gains).max(0.0);
        self.last_taxed_income = state.total_income;
        self.last_taxed_gains = state.realized_gains;

        let taxable = monthly_income + monthly_gains;
        if taxable <= 0.0 {
            return;
        }

        self.tax_due = progressive_tax(taxable, &config.tax_brackets);
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, _config: &SimulationConfig) {
        if self.tax_due > 0.0 {
            state.balance -= self.tax_due;
            state.taxes_paid += self.tax_due;
        }
    }
}
