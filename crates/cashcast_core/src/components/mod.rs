//! The closed set of daily components.
//!
//! Each module implements one engine concern behind the
//! [`Component`](crate::graph::Component) contract; `build_components`
//! assembles the full set for a run. Scheduling is entirely id/dependency
//! driven, and nothing here is special-cased by the orchestrator.

mod asset;
mod debt;
mod expense;
mod fx;
mod income;
mod metrics;
mod shock;
mod tax;

pub use asset::AssetComponent;
pub use debt::DebtComponent;
pub use expense::ExpenseComponent;
pub use fx::{FxComponent, convert, convert_from_usd, convert_to_usd, deterministic_fx_rates};
pub use income::IncomeComponent;
pub use metrics::MetricsComponent;
pub use shock::ShockComponent;
pub use tax::TaxComponent;

use crate::graph::Component;
use crate::model::RuntimeOptions;

/// Build the component set for one simulation run.
///
/// Components carry per-run scratch state (daily deltas, tax deltas since
/// the last levy), so a fresh set is built per `simulate` call.
pub fn build_components(options: &RuntimeOptions) -> Vec<Box<dyn Component>> {
    vec![
        Box::new(FxComponent::new(options.fx_rates_by_day.clone())),
        Box::new(IncomeComponent::default()),
        Box::new(ExpenseComponent::default()),
        Box::new(DebtComponent::default()),
        Box::new(AssetComponent::new(options.liquidation_order.clone())),
        Box::new(TaxComponent::default()),
        Box::new(ShockComponent::default()),
        Box::new(MetricsComponent::default()),
    ]
}

/// One-indexed day within the 30-day pseudo-month.
pub(crate) fn day_in_month(day: u32) -> u32 {
    day % 30 + 1
}
