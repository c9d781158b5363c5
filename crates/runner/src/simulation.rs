//! Simulation - Multi-period run orchestration
//!
//! Ties together:
//! - Roster bootstrap
//! - The market engine, cleared by the periodic double auction
//! - Per-period summaries and end-of-run results

use std::collections::BTreeMap;

use bazaar_core::{Agent, Good, Money, Price, Quantity};
use bazaar_market::{Economy, EngineError, PeriodSummary};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bootstrap::build_roster;
use crate::config::SimulationConfig;

/// Simulation results
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationResults {
    /// Periods completed
    pub periods_run: u64,
    /// Total deals settled
    pub total_deals: usize,
    /// Units traded per good
    pub volume_by_good: BTreeMap<Good, Quantity>,
    /// Money traded per good
    pub turnover_by_good: BTreeMap<Good, Money>,
    /// Latest clearing price per good
    pub last_price_by_good: BTreeMap<Good, Price>,
    /// Money held across all agents at the end
    pub total_money: Money,
    /// Final agent state
    pub agents: Vec<Agent>,
    /// Whether every requested period completed
    pub success: bool,
    /// Error message if any
    pub error: Option<String>,
}

/// Full economy simulation
pub struct Simulation {
    /// Configuration
    config: SimulationConfig,
    /// Market engine
    economy: Economy,
    /// Summaries of completed periods
    summaries: Vec<PeriodSummary>,
}

impl Simulation {
    /// Create a new simulation with custom configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self, EngineError> {
        let agents = build_roster(&config.bootstrap)?;
        let economy = Economy::with_double_auction(agents, config.market.clone(), config.seed)?;
        log::info!(
            "Simulation ready: {} periods cleared by {}",
            config.periods,
            economy.clearing_name()
        );

        Ok(Self {
            config,
            economy,
            summaries: Vec::new(),
        })
    }

    /// Run a single period
    pub fn step(&mut self) -> Result<&PeriodSummary, EngineError> {
        let summary = self.economy.advance_period()?;
        self.summaries.push(summary);
        Ok(&self.summaries[self.summaries.len() - 1])
    }

    /// Run the configured number of periods
    ///
    /// Stops at the first failing period; the error is reported in the
    /// results rather than returned.
    pub fn run(&mut self) -> SimulationResults {
        let periods = self.config.periods;
        log::info!("Starting simulation for {} periods...", periods);

        let mut error = None;
        for _ in 0..periods {
            if let Err(e) = self.step().map(|_| ()) {
                log::error!("Period {} failed: {}", self.economy.period() + 1, e);
                error = Some(e.to_string());
                break;
            }
        }

        let results = self.results(error);
        log::info!(
            "Simulation finished: {} periods, {} deals",
            results.periods_run,
            results.total_deals
        );
        results
    }

    /// Aggregate the periods completed so far
    pub fn results(&self, error: Option<String>) -> SimulationResults {
        let mut volume_by_good = BTreeMap::new();
        let mut turnover_by_good = BTreeMap::new();
        let mut last_price_by_good = BTreeMap::new();

        for good in Good::ALL {
            let activity = self
                .summaries
                .iter()
                .filter_map(|s| s.activity(good));
            let (qty, money) = activity.fold((Decimal::ZERO, Decimal::ZERO), |(q, m), a| {
                (q + a.qty, m + a.money)
            });
            volume_by_good.insert(good, qty);
            turnover_by_good.insert(good, money);

            if let Some(price) = self.economy.ledger().last_price_for_good(good) {
                last_price_by_good.insert(good, price);
            }
        }

        SimulationResults {
            periods_run: self.economy.period(),
            total_deals: self.summaries.iter().map(PeriodSummary::deal_count).sum(),
            volume_by_good,
            turnover_by_good,
            last_price_by_good,
            total_money: self.economy.total_money(),
            agents: self.economy.agents().to_vec(),
            success: error.is_none(),
            error,
        }
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn summaries(&self) -> &[PeriodSummary] {
        &self.summaries
    }
}
