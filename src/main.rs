use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use gravitas_core::{ScenarioKind, SimConfig};
use gravitas_sim::{Simulator, TraceRender};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    Random,
    StarPlanet,
    StaticIdentical,
}

impl From<Scenario> for ScenarioKind {
    fn from(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Random => ScenarioKind::Random,
            Scenario::StarPlanet => ScenarioKind::StarPlanet,
            Scenario::StaticIdentical => ScenarioKind::StaticIdentical,
        }
    }
}

/// Run a 2D gravity simulation headless
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML config file; missing files fall back to defaults
    #[arg(short, long, default_value = "gravitas.toml")]
    config: PathBuf,

    /// Override the configured scenario
    #[arg(short, long, value_enum)]
    scenario: Option<Scenario>,

    /// Override the iteration limit
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the body count of generated scenarios
    #[arg(short, long)]
    bodies: Option<usize>,

    /// Log a universe summary every N iterations
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Resume from an encoded simulator instead of generating one; the
    /// saved state already fixes everything the config would set
    #[arg(long, conflicts_with_all = ["config", "scenario", "iterations", "seed", "bodies", "save_config"])]
    resume: Option<PathBuf>,

    /// Write the effective configuration (file plus overrides) here
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Write the final encoded simulator here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a binary snapshot of the final universe here
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn load_config(args: &Args) -> SimConfig {
    let mut config = SimConfig::load_or_default(&args.config);
    if let Some(scenario) = args.scenario {
        config.scenario = scenario.into();
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(bodies) = args.bodies {
        config.body_count = bodies;
    }
    config
}

fn write_config(config: &SimConfig, path: &Path) -> Result<()> {
    config
        .save(path)
        .map_err(|e| anyhow!("failed to write {}: {}", path.display(), e))?;
    info!("Saved config to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let simulator = match &args.resume {
        Some(path) => gravitas_storage::from_file(path)
            .with_context(|| format!("failed to resume from {}", path.display()))?,
        None => {
            let config = load_config(&args);
            info!("Config: {:?}", config);
            if let Some(path) = &args.save_config {
                write_config(&config, path)?;
            }
            Simulator::from_config(&config)
        }
    };
    let mut simulator = simulator.with_renderer(Box::new(TraceRender::new(args.report_every)));

    let summary = simulator.run().context("simulation aborted")?;
    info!(
        "Done: {} iterations, {} bodies remaining",
        summary.iterations, summary.bodies_remaining
    );

    if let Some(path) = &args.output {
        gravitas_storage::to_file(&simulator, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    if let Some(path) = &args.snapshot {
        gravitas_storage::save_snapshot(simulator.universe(), path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
