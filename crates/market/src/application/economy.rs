use std::collections::HashSet;

use bazaar_core::{Agent, AgentId, Deal, Demand, Good, Ledger, Money, Offer, Period};
use bazaar_matching::{PeriodicDoubleAuction, create_shuffler};
use bazaar_ports::ClearingAlgorithm;
use log::{debug, info};
use rust_decimal::Decimal;

use super::order_book::{build_demands, build_offers};
use super::settlement::settle;
use crate::error::{EngineError, Result};
use crate::model::{MarketConfig, PeriodSummary};

/// Simulation root: owns the roster and the ledger and runs periods
///
/// Each period runs Produce → Trade (demands, offers, matching) → Settle →
/// Consume, strictly in that order. Offer prices in one period depend on the
/// ledger entries written by the previous one.
pub struct Economy {
    /// Market settings
    config: MarketConfig,

    /// Last completed period (0 before the first run)
    period: Period,

    /// Agents, indexed by `AgentId`
    agents: Vec<Agent>,

    /// Settled trade history
    ledger: Ledger,

    /// Clearing algorithm run once per good per period
    clearing: Box<dyn ClearingAlgorithm>,

    /// Working sets of the latest trade phase
    demands: Vec<Demand>,
    offers: Vec<Offer>,
    deals: Vec<Deal>,
}

impl Economy {
    /// Create an economy over an already-built roster
    ///
    /// The roster is rejected if it is empty, if ids do not match roster
    /// positions, or if any agent is misconfigured.
    pub fn new(
        agents: Vec<Agent>,
        clearing: Box<dyn ClearingAlgorithm>,
        config: MarketConfig,
    ) -> Result<Self> {
        config.validate().map_err(EngineError::InvalidConfiguration)?;
        validate_roster(&agents)?;

        info!(
            "Economy created: {} agents, clearing={}, price scale={}",
            agents.len(),
            clearing.name(),
            config.price_scale
        );

        Ok(Self {
            config,
            period: 0,
            agents,
            ledger: Ledger::new(),
            clearing,
            demands: Vec::new(),
            offers: Vec::new(),
            deals: Vec::new(),
        })
    }

    /// Create an economy cleared by the periodic double auction
    ///
    /// A seed makes the demand shuffle, and so the whole run, reproducible.
    pub fn with_double_auction(
        agents: Vec<Agent>,
        config: MarketConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        let clearing = PeriodicDoubleAuction::new(create_shuffler(seed));
        info!("Demand priority: {}", clearing.shuffler_name());
        Self::new(agents, Box::new(clearing), config)
    }

    /// Run one full period
    ///
    /// The period counter only moves once the period has completed; a failed
    /// period is not counted.
    pub fn advance_period(&mut self) -> Result<PeriodSummary> {
        let period = self.period + 1;
        info!("Period {} started", period);

        self.produce();
        self.trade()?;
        let settled = settle(&mut self.agents, &mut self.ledger, &self.deals, period)?;
        self.consume();
        self.period = period;

        let summary = PeriodSummary::from_deals(
            period,
            self.demands.len(),
            self.offers.len(),
            &self.deals,
            settled.money_moved,
            self.total_money(),
        );

        for activity in &summary.goods {
            info!(
                "Period {} {}: {} deals, qty {}, money {}",
                period, activity.good, activity.deals, activity.qty, activity.money
            );
        }

        Ok(summary)
    }

    /// Run `n` periods back to back, stopping at the first error
    pub fn advance_periods(&mut self, n: u64) -> Result<Vec<PeriodSummary>> {
        (0..n).map(|_| self.advance_period()).collect()
    }

    fn produce(&mut self) {
        for agent in &mut self.agents {
            agent.produce();
        }
    }

    fn trade(&mut self) -> Result<()> {
        self.demands = build_demands(&self.agents);
        debug!("Demands: {:?}", self.demands);

        self.offers = build_offers(&self.agents, &self.ledger, self.config.price_scale)?;
        debug!("Offers: {:?}", self.offers);

        self.deals.clear();
        for good in Good::ALL {
            let deals = self.clearing.clear(&self.demands, &self.offers, good)?;
            self.deals.extend(deals);
        }
        debug!("Deals: {:?}", self.deals);

        Ok(())
    }

    fn consume(&mut self) {
        for agent in &mut self.agents {
            agent.consume();
        }
    }

    /// Last completed period
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Demands of the latest period, in roster order
    pub fn demands(&self) -> &[Demand] {
        &self.demands
    }

    /// Offers of the latest period, as quoted
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Deals of the latest period, in settlement order
    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Name of the clearing algorithm in use
    pub fn clearing_name(&self) -> &str {
        self.clearing.name()
    }

    /// Money held across all agents
    pub fn total_money(&self) -> Money {
        self.agents.iter().map(|a| a.money).fold(Decimal::ZERO, |acc, m| acc + m)
    }
}

fn validate_roster(agents: &[Agent]) -> Result<()> {
    let invalid = |msg: String| Err(EngineError::InvalidConfiguration(msg));

    if agents.is_empty() {
        return invalid("roster is empty".to_string());
    }
    if agents
        .iter()
        .try_fold(Decimal::ZERO, |acc, a| acc.checked_add(a.money))
        .is_none()
    {
        return invalid("total money exceeds the representable range".to_string());
    }

    let mut names = HashSet::new();
    for (position, agent) in agents.iter().enumerate() {
        if agent.id != AgentId(position) {
            return invalid(format!(
                "{} has id {} but sits at position {}",
                agent.name, agent.id, position
            ));
        }
        if !names.insert(agent.name.as_str()) {
            return invalid(format!("duplicate agent name {}", agent.name));
        }
        if agent.produces == agent.consumes {
            return invalid(format!("{} produces and consumes {}", agent.name, agent.produces));
        }
        if agent.production_rate <= Decimal::ZERO {
            return invalid(format!(
                "{} has non-positive production rate {}",
                agent.name, agent.production_rate
            ));
        }
        if agent.money < Decimal::ZERO
            || agent.product_qty < Decimal::ZERO
            || agent.good_qty < Decimal::ZERO
        {
            return invalid(format!("{} starts with a negative balance", agent.name));
        }
        if agent.price_sensitivity < Decimal::ZERO || agent.price_sensitivity >= Decimal::ONE_HUNDRED
        {
            return invalid(format!(
                "{} has price sensitivity {} outside [0, 100)",
                agent.name, agent.price_sensitivity
            ));
        }
    }

    Ok(())
}
