//! Bootstrap - Roster construction and capital allocation
//!
//! Builds the initial agent population handed to the economy:
//! - Splits the money supply evenly (whole units, remainder dropped)
//! - Alternates goods: even agents produce A and consume B, odd agents the reverse
//! - Names agents `Agent#1`, `Agent#2`, ...

use bazaar_core::{Agent, AgentId, DEFAULT_PRICE_SENSITIVITY, Good, Money, Quantity};
use bazaar_market::EngineError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Bootstrap configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of agents to create
    pub agent_count: usize,
    /// Money supply shared among all agents
    pub total_money: Money,
    /// Units every agent produces per period
    pub production_rate: Quantity,
    /// Percentage step of every agent's pricing rule
    pub price_sensitivity: Decimal,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            agent_count: 10,
            total_money: dec!(100),
            production_rate: dec!(2),
            price_sensitivity: DEFAULT_PRICE_SENSITIVITY,
        }
    }
}

impl BootstrapConfig {
    /// Reject settings no roster can be built from
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidConfiguration(msg));

        if self.agent_count == 0 {
            return invalid("agent count must be positive".to_string());
        }
        if self.production_rate <= Decimal::ZERO {
            return invalid(format!(
                "production rate must be positive, got {}",
                self.production_rate
            ));
        }
        if self.total_money < Decimal::ZERO {
            return invalid(format!(
                "money supply must not be negative, got {}",
                self.total_money
            ));
        }
        if self.price_sensitivity < Decimal::ZERO || self.price_sensitivity >= Decimal::ONE_HUNDRED
        {
            return invalid(format!(
                "price sensitivity must be in [0, 100), got {}",
                self.price_sensitivity
            ));
        }
        Ok(())
    }

    /// Money each agent starts with
    pub fn money_per_agent(&self) -> Money {
        (self.total_money / Decimal::from(self.agent_count as u64)).floor()
    }
}

/// Build the initial roster
pub fn build_roster(config: &BootstrapConfig) -> Result<Vec<Agent>, EngineError> {
    config.validate()?;

    let money = config.money_per_agent();
    let agents: Vec<Agent> = (0..config.agent_count)
        .map(|index| {
            let produces = if index % 2 == 0 { Good::A } else { Good::B };
            Agent::new(
                AgentId(index),
                format!("Agent#{}", index + 1),
                produces,
                produces.counterpart(),
                config.production_rate,
                money,
            )
            .with_price_sensitivity(config.price_sensitivity)
        })
        .collect();

    log::info!(
        "Bootstrapped {} agents with {} money each (production rate {}, {} on A, {} on B)",
        agents.len(),
        money,
        config.production_rate,
        producers_of(&agents, Good::A).len(),
        producers_of(&agents, Good::B).len()
    );

    Ok(agents)
}

/// Agents producing `good`
pub fn producers_of(agents: &[Agent], good: Good) -> Vec<&Agent> {
    agents.iter().filter(|a| a.produces == good).collect()
}
