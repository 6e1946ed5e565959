//! CSV and JSON export of simulation results.
//!
//! The CSV is one row per daily snapshot; the JSON document carries the
//! summary, the weekly downsamples, and the fired shocks, which is the
//! shape consumed by spreadsheet and sharing integrations.

use cashcast_core::model::{DaySnapshot, FiredShock, SimulationResult, SimulationSummary};
use serde::Serialize;

/// Quote a CSV field when it contains a comma, quote, or newline.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Flat per-day CSV: one row per daily snapshot.
pub fn to_scenario_csv(result: &SimulationResult, scenario_name: &str) -> String {
    let header = "scenarioName,day,balance,balanceP5,balanceP95,nav,navP5,navP95,creditScore";

    let mut out = String::with_capacity(64 * (result.daily_snapshots.len() + 1));
    out.push_str(header);
    out.push('\n');

    for snapshot in &result.daily_snapshots {
        out.push_str(&escape_csv(scenario_name));
        out.push_str(&format!(
            ",{},{},{},{},{},{},{},{}\n",
            snapshot.day,
            snapshot.balance,
            snapshot.balance_p5,
            snapshot.balance_p95,
            snapshot.nav,
            snapshot.nav_p5,
            snapshot.nav_p95,
            snapshot.credit_score,
        ));
    }

    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioExport<'a> {
    scenario_name: &'a str,
    generated_at: String,
    summary: &'a SimulationSummary,
    weekly_snapshots: &'a [DaySnapshot],
    fired_shocks: &'a [FiredShock],
}

/// Pretty-printed JSON document with the summary, weekly snapshots, and
/// fired shocks.
pub fn to_scenario_json(
    result: &SimulationResult,
    scenario_name: &str,
) -> serde_json::Result<String> {
    let export = ScenarioExport {
        scenario_name,
        generated_at: jiff::Timestamp::now().to_string(),
        summary: &result.summary,
        weekly_snapshots: &result.weekly_snapshots,
        fired_shocks: &result.fired_shocks,
    };

    serde_json::to_string_pretty(&export)
}
