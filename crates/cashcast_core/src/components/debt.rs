//! Debt component: daily interest accrual and scheduled minimum payments.

use super::{convert, day_in_month};
use crate::graph::Component;
use crate::model::SimulationConfig;
use crate::simulation_state::DayState;

#[derive(Debug, Clone, Copy, Default)]
struct DebtPlan {
    interest: f64,
    payment: f64,
    payment_base: f64,
}

/// Accrues interest at APR/365 unconditionally and attempts the minimum
/// payment on the first day of each pseudo-month.
///
/// Affordability is judged against the day-start balance for every debt
/// (prepare is read-only), so one debt's payment never starves another's
/// affordability check within the same day.
#[derive(Default)]
pub struct DebtComponent {
    /// Parallel to `config.debts`.
    plans: Vec<DebtPlan>,
    missed: u32,
}

impl Component for DebtComponent {
    fn id(&self) -> &'static str {
        "debt"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &["income", "expense"]
    }

    fn prepare(&mut self, day: u32, state: &DayState, config: &SimulationConfig) {
        self.plans.clear();
        self.missed = 0;

        for debt in &config.debts {
            let principal = state.debts.get(&debt.id).copied().unwrap_or(0.0);
            let mut plan = DebtPlan::default();

            if principal > 0.0 {
                plan.interest = principal * debt.apr / 365.0;

                if day_in_month(day) == 1 {
                    let payment = debt.min_payment.min(principal + plan.interest);
                    let payment_base = convert(
                        payment,
                        debt.currency,
                        config.base_currency,
                        state.fx_rates,
                    );
                    if state.balance >= payment_base {
                        plan.payment = payment;
                        plan.payment_base = payment_base;
                    } else {
                        self.missed += 1;
                    }
                }
            }

            self.plans.push(plan);
        }
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, config: &SimulationConfig) {
        for (debt, plan) in config.debts.iter().zip(&self.plans) {
            let principal = state.debts.get(&debt.id).copied().unwrap_or(0.0);
            if principal <= 0.0 {
                continue;
            }

            let mut new_principal = principal + plan.interest;
            if plan.payment > 0.0 {
                new_principal -= plan.payment;
                state.balance -= plan.payment_base;
                state.total_debt_payments += plan.payment_base;
            }

            state.debts.insert(debt.id.clone(), new_principal.max(0.0));
        }

        state.missed_payments += self.missed;
    }
}
