use std::fs;
use std::path::{Path, PathBuf};

use cashcast::worker::{SimulationRequest, SimulationResponse, SimulationWorker};
use cashcast::{export, init_logging};
use cashcast_core::model::{
    CounterfactualResult, RuntimeOptions, SimulationConfig, SimulationResult, SimulationSummary,
};
use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};

#[derive(Parser, Debug)]
#[command(name = "cashcast")]
#[command(about = "Deterministic day-by-day financial projection")]
struct Args {
    /// Path to the scenario configuration (JSON)
    scenario: PathBuf,

    /// Optional runtime overrides (JSON: pinned FX rates, initial lots,
    /// liquidation priority)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Also run the no-shocks counterfactual and report the deltas
    #[arg(long)]
    counterfactual: bool,

    /// Write the flat per-day CSV export to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the JSON export (summary + weekly snapshots) to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Path to the data directory (default: ~/.cashcast/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cashcast")
}

enum Outcome {
    Single(Box<SimulationResult>),
    Counterfactual(Box<CounterfactualResult>),
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let _guard = init_logging(&data_dir, &args.log_level)?;

    let config = load_scenario(&args.scenario)?;
    let options = match &args.overrides {
        Some(path) => load_overrides(path)?,
        None => RuntimeOptions::default(),
    };

    tracing::info!(
        scenario = %config.name,
        horizon = config.horizon_days,
        counterfactual = args.counterfactual,
        "starting run"
    );

    let worker = SimulationWorker::new();
    let request = if args.counterfactual {
        SimulationRequest::RunCounterfactual {
            config: config.clone(),
            options,
        }
    } else {
        SimulationRequest::Run {
            config: config.clone(),
            options,
        }
    };
    if !worker.send(request) {
        return Err(eyre!("simulation worker is unavailable"));
    }

    let outcome = loop {
        match worker.recv().ok_or_else(|| eyre!("worker thread exited"))? {
            SimulationResponse::Progress { day, total_days } => {
                if !args.quiet {
                    println!("  simulating day {day}/{total_days}");
                }
            }
            SimulationResponse::Complete(result) => break Outcome::Single(result),
            SimulationResponse::CounterfactualComplete(result) => {
                break Outcome::Counterfactual(result);
            }
            SimulationResponse::Cancelled => return Err(eyre!("run was cancelled")),
            SimulationResponse::Error(message) => {
                return Err(eyre!("simulation failed: {message}"));
            }
        }
    };

    let result = match &outcome {
        Outcome::Single(result) => result.as_ref(),
        Outcome::Counterfactual(pair) => {
            println!("== Counterfactual (no shocks vs actual) ==");
            println!(
                "  balance delta: {:+.2}",
                pair.insights.balance_delta_no_shocks_vs_actual
            );
            println!(
                "  nav delta:     {:+.2}",
                pair.insights.nav_delta_no_shocks_vs_actual
            );
            &pair.with_shocks
        }
    };

    print_summary(&config, &result.summary, result.compute_time_ms);

    if let Some(path) = &args.csv {
        fs::write(path, export::to_scenario_csv(result, &config.name))
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }
    if let Some(path) = &args.json {
        let document = export::to_scenario_json(result, &config.name)?;
        fs::write(path, document)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

fn load_scenario(path: &Path) -> color_eyre::Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read scenario {}", path.display()))?;
    serde_json::from_str(&text).wrap_err("failed to parse scenario configuration")
}

fn load_overrides(path: &Path) -> color_eyre::Result<RuntimeOptions> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read overrides {}", path.display()))?;
    serde_json::from_str(&text).wrap_err("failed to parse runtime overrides")
}

fn print_summary(config: &SimulationConfig, summary: &SimulationSummary, compute_time_ms: f64) {
    println!(
        "== {} ({} days, {:.1}ms) ==",
        config.name, config.horizon_days, compute_time_ms
    );
    println!(
        "  final balance: {:.2}  [P5 {:.2} / P95 {:.2}]",
        summary.final_balance, summary.final_balance_p5, summary.final_balance_p95
    );
    println!(
        "  final NAV:     {:.2}  [P5 {:.2} / P95 {:.2}]",
        summary.final_nav, summary.final_nav_p5, summary.final_nav_p95
    );
    println!("  credit score:  {:.0}", summary.final_credit_score);
    println!("  vibe tier:     {:?}", summary.vibe_tier);
    println!(
        "  collapse prob: {:.1}%  resilience: {:.0}/100",
        summary.collapse_probability * 100.0,
        summary.shock_resilience_index
    );
    println!(
        "  deficit days:  {}  taxes paid: {:.2}  realized gains: {:.2}",
        summary.deficit_days, summary.taxes_paid, summary.realized_gains
    );
    if !summary.asset_ending_values.is_empty() {
        println!("  ending assets:");
        for (id, value) in &summary.asset_ending_values {
            println!("    {id}: {value:.2}");
        }
    }
}
