//! Bazaar Binary
//!
//! Runs a two-good economy for a number of periods and prints the final
//! agent state, optionally with the full trade ledger.

use std::path::PathBuf;

use bazaar_runner::{Simulation, SimulationConfig, report};
use clap::Parser;
use rust_decimal::Decimal;

/// Two-good economy cleared by a periodic double auction
#[derive(Parser, Debug)]
#[command(name = "bazaar")]
#[command(author, version, about = "Two-good economy cleared by a periodic double auction")]
struct Cli {
    /// Load configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of periods to run
    #[arg(short, long)]
    periods: Option<u64>,

    /// Number of agents
    #[arg(long)]
    agents: Option<usize>,

    /// Money supply split evenly across agents
    #[arg(long)]
    money: Option<Decimal>,

    /// Units each agent produces per period
    #[arg(long)]
    production_rate: Option<Decimal>,

    /// Percentage step of the pricing rule
    #[arg(long)]
    sensitivity: Option<Decimal>,

    /// Seed for the demand shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Print every settled trade
    #[arg(long)]
    ledger: bool,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                SimulationConfig::from_file(path)?
            }
            None => SimulationConfig::default(),
        };

        if let Some(periods) = self.periods {
            config.periods = periods;
        }
        if let Some(agents) = self.agents {
            config.bootstrap.agent_count = agents;
        }
        if let Some(money) = self.money {
            config.bootstrap.total_money = money;
        }
        if let Some(rate) = self.production_rate {
            config.bootstrap.production_rate = rate;
        }
        if let Some(sensitivity) = self.sensitivity {
            config.bootstrap.price_sensitivity = sensitivity;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (show_ledger, as_json) = (cli.ledger, cli.json);
    let config = cli.into_config()?;

    let mut sim = Simulation::with_config(config)?;
    let results = sim.run();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for summary in sim.summaries() {
            println!("{}", report::period_line(summary));
        }
        println!();
        println!("{}", report::agents_report(sim.economy().agents()));
        if show_ledger {
            println!();
            println!(
                "{}",
                report::ledger_report(sim.economy().ledger(), sim.economy().agents())
            );
        }
        println!();
        println!("{}", report::results_report(&results));
    }

    match results.error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}
