mod config;
mod results;

pub use config::{
    Asset, AssetClass, AssetLot, Currency, Debt, Expense, FxConfig, FxRates, IncomeStream,
    RuntimeOptions, ShockPreset, SimulationConfig, TaxBracket,
};
pub use results::{
    CounterfactualInsights, CounterfactualResult, DaySnapshot, FiredShock, SimulationResult,
    SimulationSummary, VibeTier,
};
