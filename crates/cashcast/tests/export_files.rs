//! End-to-end export: write the CSV/JSON documents to disk and read them
//! back the way a spreadsheet or share consumer would.

use cashcast::export::{to_scenario_csv, to_scenario_json};
use cashcast_core::model::{Currency, FxConfig, FxRates, SimulationConfig};
use cashcast_core::simulation::simulate;

fn scenario() -> SimulationConfig {
    SimulationConfig {
        name: "Export, \"quoted\"".to_string(),
        horizon_days: 21,
        base_currency: Currency::Usd,
        fx: FxConfig {
            base_rates: FxRates {
                eur: 0.9,
                pkr: 280.0,
            },
            volatility: 0.0,
        },
        starting_cash: 1_000.0,
        incomes: Vec::new(),
        expenses: Vec::new(),
        debts: Vec::new(),
        assets: Vec::new(),
        tax_brackets: Vec::new(),
        shocks: Vec::new(),
        cash_reserve_ratio: 0.0,
    }
}

#[test]
fn csv_file_round_trips_with_escaped_name() {
    let result = simulate(&scenario()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.csv");

    std::fs::write(&path, to_scenario_csv(&result, &result.config.name)).unwrap();
    let read_back = std::fs::read_to_string(&path).unwrap();

    let lines: Vec<&str> = read_back.trim_end().lines().collect();
    assert_eq!(lines.len(), 1 + 22);
    // Commas and quotes in the scenario name stay inside one quoted field
    assert!(lines[1].starts_with("\"Export, \"\"quoted\"\"\",0,"));
}

#[test]
fn json_file_parses_back_into_a_document() {
    let result = simulate(&scenario()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");

    std::fs::write(&path, to_scenario_json(&result, &result.config.name).unwrap()).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["scenarioName"], "Export, \"quoted\"");
    // Weekly snapshots for a 21-day horizon: days 0, 7, 14, 21
    assert_eq!(value["weeklySnapshots"].as_array().unwrap().len(), 4);
}
