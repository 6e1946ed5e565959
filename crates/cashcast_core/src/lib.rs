//! Deterministic day-by-day financial projection engine
//!
//! Given a static configuration of income streams, expenses, debts, assets,
//! tax brackets, FX dynamics, and scheduled shock events, the engine
//! produces a full daily trajectory of cash balance, net asset value,
//! credit score, and analytic P5/P95 uncertainty bands over a horizon of up
//! to 1,825 days. It supports:
//! - A dependency-ordered component graph with a deterministic topological
//!   sort and branch-safe (copy-on-write) daily state
//! - Multi-currency conversion over a deterministic sinusoidal rate path
//! - FIFO cost-basis lot tracking for realized capital gains
//! - Liquidation under cash-reserve constraints
//! - Analytic (non-Monte-Carlo) percentile bands and a no-shocks
//!   counterfactual variant
//!
//! Results are bit-reproducible: the same configuration always yields the
//! same snapshot sequence and summary.
//!
//! ```ignore
//! use cashcast_core::simulation::simulate;
//!
//! let config: SimulationConfig = serde_json::from_str(scenario_json)?;
//! let result = simulate(&config)?;
//! println!("final balance: {}", result.summary.final_balance);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod components;
pub mod error;
pub mod graph;
pub mod liquidation;
pub mod metrics;
pub mod simulation;
pub mod simulation_state;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::GraphError;
pub use model::{
    CounterfactualResult, RuntimeOptions, SimulationConfig, SimulationResult, SimulationSummary,
};
pub use simulation::{simulate, simulate_counterfactual, simulate_with_options};
