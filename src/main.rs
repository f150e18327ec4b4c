//! Portfolio Sim CLI
//!
//! Runs the daily simulation loop and prints each day's state to stdout.

use anyhow::Context;
use clap::Parser;
use portfolio_sim::market::GaussianSource;
use portfolio_sim::{display, SimulationConfig, Simulator};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "portfolio_sim", about = "Multi-asset portfolio rebalancing simulator")]
struct Args {
    /// Number of days to simulate; runs until interrupted if omitted
    #[arg(long)]
    days: Option<u64>,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON market configuration; built-in market if omitted
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::from_json_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimulationConfig::default_market(),
    };

    let rng = match args.seed {
        Some(seed) => GaussianSource::from_seed(seed),
        None => GaussianSource::from_entropy(),
    };

    let mut simulator = Simulator::new(config, Box::new(rng))?;
    let config = simulator.config().clone();

    simulator.run(args.days, |report| {
        println!("{}", display::render_report(&config, report));
    });

    Ok(())
}
