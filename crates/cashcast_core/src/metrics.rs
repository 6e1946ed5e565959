//! Credit scoring, vibe-tier classification, and the resilience index.

use crate::model::VibeTier;

pub const CREDIT_SCORE_FLOOR: f64 = 300.0;
pub const CREDIT_SCORE_CEILING: f64 = 850.0;
/// Every run starts at this score on day 0.
pub const STARTING_CREDIT_SCORE: f64 = 650.0;

/// Daily credit-score adjustment.
///
/// Penalizes missed payments and leverage, rewards credit-history length,
/// and drifts gently upward otherwise. Clamped to [300, 850].
pub fn update_credit_score(current: f64, debt_ratio: f64, missed_payments: u32, day: u32) -> f64 {
    let punctuality_penalty = f64::from(missed_payments) * 5.0;
    let debt_penalty = (debt_ratio * 100.0).min(200.0);
    let age_bonus = (f64::from(day) * 0.01).min(50.0);

    (current - punctuality_penalty - debt_penalty + age_bonus + 0.5)
        .clamp(CREDIT_SCORE_FLOOR, CREDIT_SCORE_CEILING)
}

/// Classify financial health, evaluated as a threshold cascade from worst
/// to best.
pub fn compute_vibe_tier(
    balance: f64,
    nav: f64,
    credit_score: f64,
    deficit_days: u32,
    liquidity_ratio: f64,
) -> VibeTier {
    if deficit_days >= 90 || nav < 0.0 {
        VibeTier::Collapse
    } else if deficit_days >= 30 || credit_score < 400.0 || liquidity_ratio < 0.05 {
        VibeTier::Crisis
    } else if deficit_days >= 7 || credit_score < 550.0 || liquidity_ratio < 0.15 {
        VibeTier::Stressed
    } else if credit_score >= 700.0 && liquidity_ratio >= 0.3 && balance > 0.0 {
        VibeTier::Thriving
    } else {
        VibeTier::Stable
    }
}

/// Shock Resilience Index (0-100): a capped weighted sum of liquidity,
/// debt-service, credit-score, and deficit-stability terms.
pub fn compute_rsi(
    liquidity_ratio: f64,
    debt_service_ratio: f64,
    credit_score: f64,
    deficit_days: u32,
) -> f64 {
    let liquidity_score = (liquidity_ratio * 100.0).min(30.0);
    let debt_score = (30.0 - debt_service_ratio * 50.0).max(0.0);
    let credit_contrib = (credit_score - 300.0) / 550.0 * 25.0;
    let stability_score = (15.0 - f64::from(deficit_days) * 0.5).max(0.0);

    (liquidity_score + debt_score + credit_contrib + stability_score).clamp(0.0, 100.0)
}
