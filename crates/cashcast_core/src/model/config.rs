//! Scenario configuration types
//!
//! Everything the engine needs for a run arrives in one immutable
//! [`SimulationConfig`]. The host is responsible for range-validating the
//! configuration before it reaches the engine; nothing here is re-checked.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Pkr,
}

/// Exchange rates relative to USD (foreign units per dollar).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxRates {
    #[serde(rename = "EUR")]
    pub eur: f64,
    #[serde(rename = "PKR")]
    pub pkr: f64,
}

/// FX configuration for the deterministic rate path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxConfig {
    pub base_rates: FxRates,
    /// Annual volatility scaling the rate oscillation and quantile bands.
    pub volatility: f64,
}

/// Asset class identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Cash,
    Savings,
    IndexFund,
    RealEstate,
    Crypto,
}

/// A cost-basis/value tranche of an asset purchase, consumed oldest-first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLot {
    pub cost_basis: f64,
    pub value: f64,
}

/// Single asset holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub class: AssetClass,
    pub value: f64,
    pub currency: Currency,
    /// Expected annual return (0.07 = 7%).
    pub expected_return: f64,
    /// Annual volatility for quantile bands.
    pub volatility: f64,
    /// Sale penalty as a fraction (0.06 = 6% haircut on liquidation).
    pub sale_penalty: f64,
    /// Liquidity delay in days; only zero-delay assets are sellable.
    pub liquidity_delay_days: u32,
    /// Locked assets neither appreciate nor liquidate.
    pub locked: bool,
}

/// Single debt / liability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub principal: f64,
    pub currency: Currency,
    /// Annual percentage rate (0.18 = 18%).
    pub apr: f64,
    /// Minimum monthly payment, in the debt's currency.
    pub min_payment: f64,
    #[serde(default)]
    pub missed_payments: u32,
}

/// Recurring income stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStream {
    pub id: String,
    pub name: String,
    /// Monthly gross amount.
    pub monthly_amount: f64,
    pub currency: Currency,
    /// Day of the pseudo-month the income arrives (1-28). Zero spreads the
    /// amount evenly across all 30 days.
    pub day_of_month: u32,
}

/// Recurring expense, always spread evenly across the pseudo-month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub monthly_amount: f64,
    pub currency: Currency,
    pub essential: bool,
}

/// Progressive tax bracket over `[floor, ceiling)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub floor: f64,
    pub ceiling: f64,
    /// Marginal rate (0.22 = 22%).
    pub rate: f64,
}

/// One-off scheduled shock event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShockPreset {
    pub id: String,
    pub name: String,
    /// Day index on which the shock fires.
    pub day: u32,
    /// Monetary impact (negative = cost), in the shock's currency.
    pub amount: f64,
    pub currency: Currency,
    pub enabled: bool,
    /// Severity multiplier (1.0 = normal).
    pub severity: f64,
}

/// Complete simulation input configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Scenario name.
    pub name: String,
    /// Number of days to simulate (max 1825 = 5 years).
    pub horizon_days: u32,
    /// Base currency for reporting.
    pub base_currency: Currency,
    pub fx: FxConfig,
    /// Starting cash balance in the base currency.
    pub starting_cash: f64,
    pub incomes: Vec<IncomeStream>,
    pub expenses: Vec<Expense>,
    pub debts: Vec<Debt>,
    pub assets: Vec<Asset>,
    pub tax_brackets: Vec<TaxBracket>,
    pub shocks: Vec<ShockPreset>,
    /// Fraction of total asset value to hold as a cash reserve; feeds the
    /// liquidation trigger.
    pub cash_reserve_ratio: f64,
}

impl SimulationConfig {
    /// Variant of this configuration with every shock disabled, used for the
    /// counterfactual run.
    #[must_use]
    pub fn without_shocks(&self) -> Self {
        let mut config = self.clone();
        for shock in &mut config.shocks {
            shock.enabled = false;
        }
        config
    }
}

/// Optional per-run overrides for tests and "what actually happened" replays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeOptions {
    /// Rates pinned for specific days; takes precedence over the
    /// deterministic path.
    #[serde(default)]
    pub fx_rates_by_day: FxHashMap<u32, FxRates>,
    /// Explicit day-0 cost-basis lots per asset id.
    #[serde(default)]
    pub initial_asset_lots: FxHashMap<String, Vec<AssetLot>>,
    /// Explicit liquidation priority; listed assets sell first, in order.
    #[serde(default)]
    pub liquidation_order: Vec<String>,
}
