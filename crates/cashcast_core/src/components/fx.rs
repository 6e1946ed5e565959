//! Deterministic exchange-rate dynamics and pairwise conversion.
//!
//! Rates follow a sinusoidal oscillation around the configured base rates;
//! no randomness, so the same day index always yields the same rates. Each
//! currency oscillates at its own frequency to avoid correlated noise.
//! Conversion between any two currencies routes through USD.

use rustc_hash::FxHashMap;

use crate::graph::Component;
use crate::model::{Currency, FxRates, SimulationConfig};
use crate::simulation_state::DayState;

/// Rates for a given day: base rate modulated by a volatility-scaled sine.
pub fn deterministic_fx_rates(day: u32, base_rates: FxRates, volatility: f64) -> FxRates {
    let d = f64::from(day);
    let eur_factor = 1.0 + volatility * (d * 0.017).sin() * 0.1;
    let pkr_factor = 1.0 + volatility * (d * 0.023 + 1.5).sin() * 0.1;

    FxRates {
        eur: base_rates.eur * eur_factor,
        pkr: base_rates.pkr * pkr_factor,
    }
}

/// Convert an amount into USD. Rates are foreign units per dollar.
pub fn convert_to_usd(amount: f64, from: Currency, rates: FxRates) -> f64 {
    match from {
        Currency::Usd => amount,
        Currency::Eur => amount / rates.eur,
        Currency::Pkr => amount / rates.pkr,
    }
}

/// Convert a USD amount into another currency.
pub fn convert_from_usd(amount: f64, to: Currency, rates: FxRates) -> f64 {
    match to {
        Currency::Usd => amount,
        Currency::Eur => amount * rates.eur,
        Currency::Pkr => amount * rates.pkr,
    }
}

/// Convert between any two currencies, pivoting through USD.
pub fn convert(amount: f64, from: Currency, to: Currency, rates: FxRates) -> f64 {
    if from == to {
        return amount;
    }
    convert_from_usd(convert_to_usd(amount, from, rates), to, rates)
}

/// Publishes the day's rates into the state before anything converts.
///
/// Has no dependencies; the scheduler's lexicographic tie-break places "fx"
/// ahead of the other zero-dependency components.
pub struct FxComponent {
    overrides: FxHashMap<u32, FxRates>,
    current: FxRates,
}

impl FxComponent {
    pub fn new(overrides: FxHashMap<u32, FxRates>) -> Self {
        Self {
            overrides,
            current: FxRates { eur: 1.0, pkr: 1.0 },
        }
    }
}

impl Component for FxComponent {
    fn id(&self) -> &'static str {
        "fx"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        &[]
    }

    fn prepare(&mut self, day: u32, _state: &DayState, config: &SimulationConfig) {
        self.current = match self.overrides.get(&day) {
            Some(pinned) => *pinned,
            None => deterministic_fx_rates(day, config.fx.base_rates, config.fx.volatility),
        };
    }

    fn apply(&mut self, _day: u32, state: &mut DayState, _config: &SimulationConfig) {
        state.fx_rates = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES: FxRates = FxRates {
        eur: 0.9,
        pkr: 280.0,
    };

    #[test]
    fn same_day_same_rates() {
        let base = FxRates {
            eur: 0.9,
            pkr: 280.0,
        };
        let a = deterministic_fx_rates(100, base, 0.15);
        let b = deterministic_fx_rates(100, base, 0.15);
        assert_eq!(a.eur, b.eur);
        assert_eq!(a.pkr, b.pkr);
    }

    #[test]
    fn zero_volatility_pins_base_rates() {
        let base = FxRates {
            eur: 0.9,
            pkr: 280.0,
        };
        let rates = deterministic_fx_rates(123, base, 0.0);
        assert_eq!(rates.eur, 0.9);
        assert_eq!(rates.pkr, 280.0);
    }

    #[test]
    fn oscillation_stays_within_amplitude() {
        let base = FxRates {
            eur: 1.0,
            pkr: 100.0,
        };
        for day in 0..2_000 {
            let rates = deterministic_fx_rates(day, base, 1.0);
            assert!(rates.eur >= 0.9 && rates.eur <= 1.1);
            assert!(rates.pkr >= 90.0 && rates.pkr <= 110.0);
        }
    }

    #[test]
    fn conversion_pivots_through_usd() {
        // 90 EUR -> 100 USD -> 28_000 PKR
        let pkr = convert(90.0, Currency::Eur, Currency::Pkr, RATES);
        assert!((pkr - 28_000.0).abs() < 1e-9);
    }

    #[test]
    fn same_currency_is_identity() {
        assert_eq!(convert(42.0, Currency::Eur, Currency::Eur, RATES), 42.0);
    }

    #[test]
    fn round_trip_preserves_amount() {
        let eur = convert(1_000.0, Currency::Usd, Currency::Eur, RATES);
        let usd = convert(eur, Currency::Eur, Currency::Usd, RATES);
        assert!((usd - 1_000.0).abs() < 1e-9);
    }
}
