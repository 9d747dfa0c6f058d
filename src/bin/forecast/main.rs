// Commission Forecast Runner v0.1.0 — Monte Carlo payout distribution
// ChaCha8 per-trial streams, seedable, describe-style summary on stdout
//
// Usage:
//   cargo run --release --bin forecast                          # Baseline scenario, random seed
//   cargo run --release --bin forecast -- --seed 42             # Reproducible run
//   cargo run --release --bin forecast -- --scenario volatile   # Named scenario
//   cargo run --release --bin forecast -- --config plan.json    # Config from JSON
//   cargo run --release --bin forecast -- --json                # JSON report instead of tables

mod report;
mod scenarios;

use anyhow::{bail, Context, Result};
use clap::Parser;
use commission_engine::{CommissionSimulation, SimulationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use report::*;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "forecast")]
#[command(version)]
#[command(about = "Monte Carlo forecast of annual sales-commission payouts")]
struct Cli {
    /// Named starting scenario (see --list)
    #[arg(short, long, default_value = "baseline")]
    scenario: String,

    /// JSON config file; replaces the scenario's config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override: reps per trial
    #[arg(long)]
    reps: Option<usize>,

    /// Override: number of trials
    #[arg(long)]
    trials: Option<usize>,

    /// Override: mean percent-to-target
    #[arg(long)]
    mean: Option<f64>,

    /// Override: standard deviation of percent-to-target
    #[arg(long)]
    std_dev: Option<f64>,

    /// Base seed; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,

    /// Also print the first N reps of one sampled trial
    #[arg(long, value_name = "N")]
    inspect: Option<usize>,

    /// List scenarios and exit
    #[arg(long)]
    list: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn resolve_config(cli: &Cli) -> Result<(String, SimulationConfig)> {
    let (name, mut config) = match &cli.config {
        Some(path) => {
            let config = SimulationConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path))?;
            (path.display().to_string(), config)
        }
        None => match scenarios::find(&cli.scenario) {
            Some(s) => (s.name.to_string(), s.config()),
            None => bail!("Unknown scenario: {} (try --list)", cli.scenario),
        },
    };

    if let Some(reps) = cli.reps {
        config.unit_count = reps;
    }
    if let Some(trials) = cli.trials {
        config.trial_count = trials;
    }
    if let Some(mean) = cli.mean {
        config.performance_mean = mean;
    }
    if let Some(std_dev) = cli.std_dev {
        config.performance_stddev = std_dev;
    }

    Ok((name, config))
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    if cli.list {
        for s in scenarios::scenarios() {
            println!("  {:<14} {}", s.name, s.label);
        }
        return Ok(());
    }

    let (scenario, config) = resolve_config(&cli)?;
    let sim = CommissionSimulation::new(config).context("Invalid simulation config")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(scenario = %scenario, seed, "Starting forecast");

    let start = Instant::now();
    let results = sim.run_seeded(seed);
    let elapsed_ms = start.elapsed().as_millis();
    let summary = results.summary();

    if cli.json {
        let report = ForecastReport {
            version: env!("CARGO_PKG_VERSION"),
            prng: "ChaCha8Rng",
            scenario,
            seed,
            elapsed_ms,
            config: sim.config().clone(),
            summary,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    let config = sim.config();
    println!("\n  Commission Forecast Runner v{}", env!("CARGO_PKG_VERSION"));
    println!("  Scenario: {} | Reps: {} | Trials: {} | Seed: {} | {}ms\n",
        scenario, config.unit_count, config.trial_count, seed, elapsed_ms);

    if let Some(limit) = cli.inspect {
        // Inspection stream is separate from the trial streams
        let units = sim.inspect_trial(&mut ChaCha8Rng::seed_from_u64(seed ^ u64::MAX));
        print_units(&units, limit);
        println!();
    }

    print_summary(&summary);
    println!();
    println!("  Expected commission: {} (95% CI {} .. {})\n",
        format_thousands(summary.payout_amount.mean, 2),
        format_thousands(summary.payout_amount.ci_lower, 2),
        format_thousands(summary.payout_amount.ci_upper, 2),
    );

    Ok(())
}
