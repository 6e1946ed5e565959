//! Analytic (non-sampled) derived metrics.
//!
//! Quantile bands come from a lognormal approximation driven by time-scaled
//! composite volatility; the summary risk figures are deterministic
//! functions of the run's final state and snapshot history.

use crate::model::{Asset, DaySnapshot, FiredShock};

/// 5th/95th percentile estimates of a value at a given day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileBand {
    pub p5: f64,
    pub p95: f64,
}

const Z5: f64 = -1.645;
const Z95: f64 = 1.645;

/// Analytic P5/P95 band around an expected value.
///
/// Volatility scales with the square root of elapsed time (diffusion); on
/// day 0 or with zero volatility the band collapses onto the expectation.
pub fn quantile_bands(expected: f64, day: u32, annual_volatility: f64) -> QuantileBand {
    if day == 0 || annual_volatility == 0.0 {
        return QuantileBand {
            p5: expected,
            p95: expected,
        };
    }

    let time_years = f64::from(day) / 365.0;
    let sigma = annual_volatility * time_years.sqrt();

    QuantileBand {
        p5: expected * (Z5 * sigma - 0.5 * sigma * sigma).exp(),
        p95: expected * (Z95 * sigma - 0.5 * sigma * sigma).exp(),
    }
}

/// Value-weighted average of asset volatilities, defaulting to 10% annual
/// when the scenario holds no assets.
pub fn composite_volatility(assets: &[Asset]) -> f64 {
    if assets.is_empty() {
        return 0.1;
    }
    let weighted: f64 = assets.iter().map(|a| a.volatility * a.value).sum();
    let total: f64 = assets.iter().map(|a| a.value).sum();
    weighted / total.max(1.0)
}

/// Heuristic collapse probability: a logistic squash of a weighted blend of
/// liquidity, debt-service, deficit-streak, and credit risks.
pub fn collapse_probability(
    liquidity_ratio: f64,
    debt_service_ratio: f64,
    deficit_streak: u32,
    credit_score: f64,
) -> f64 {
    let liquidity_risk = (1.0 - liquidity_ratio * 5.0).max(0.0);
    let debt_risk = (debt_service_ratio * 2.0).min(1.0);
    let deficit_risk = (f64::from(deficit_streak) / 90.0).min(1.0);
    let credit_risk = ((650.0 - credit_score) / 350.0).max(0.0);

    let risk_score =
        0.3 * liquidity_risk + 0.25 * debt_risk + 0.25 * deficit_risk + 0.2 * credit_risk;

    1.0 / (1.0 + (-10.0 * (risk_score - 0.5)).exp())
}

/// Mean balance increase on days immediately following a negative-balance
/// day. Zero when no recovery ever happened.
pub fn recovery_slope(snapshots: &[DaySnapshot]) -> f64 {
    let mut total_recovery = 0.0;
    let mut recovery_periods = 0u32;

    for pair in snapshots.windows(2) {
        if pair[0].balance < 0.0 && pair[1].balance > pair[0].balance {
            total_recovery += pair[1].balance - pair[0].balance;
            recovery_periods += 1;
        }
    }

    if recovery_periods > 0 {
        total_recovery / f64::from(recovery_periods)
    } else {
        0.0
    }
}

/// Fired-shock count normalized to a 30-day rate.
pub fn shock_clustering_density(fired_count: usize, horizon_days: u32) -> f64 {
    let total_days = f64::from((horizon_days + 1).max(1));
    fired_count as f64 / total_days * 30.0
}

/// Mean absolute base-currency magnitude of fired shocks.
pub fn shock_intensity_average(fired: &[FiredShock]) -> f64 {
    if fired.is_empty() {
        return 0.0;
    }
    fired.iter().map(|s| s.amount.abs()).sum::<f64>() / fired.len() as f64
}
