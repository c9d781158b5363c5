//! Order Book Builder
//!
//! Snapshots the roster into this period's demands and offers. Both lists
//! are built from pre-trade state and follow roster order.

use bazaar_core::{Agent, Demand, Ledger, Offer};
use rust_decimal::Decimal;

use crate::error::{Result, invariant};

/// One demand per agent, budgeted with all of its money
pub fn build_demands(agents: &[Agent]) -> Vec<Demand> {
    agents.iter().map(Agent::demand).collect()
}

/// One offer per agent holding unsold production
///
/// The asking price comes from the agent's pricing rule, fed with the
/// agent's last clearing price from the ledger. Agents with nothing to sell
/// are left out.
pub fn build_offers(agents: &[Agent], ledger: &Ledger, price_scale: u32) -> Result<Vec<Offer>> {
    agents
        .iter()
        .filter(|agent| agent.product_qty > Decimal::ZERO)
        .map(|agent| {
            let last_price = ledger.last_cleared_price(agent.id);
            let price = agent.price_quote(last_price, price_scale).ok_or_else(|| {
                invariant(format!("{} has no representable asking price", agent.name))
            })?;
            Ok(Offer::new(agent.id, agent.produces, agent.product_qty, price))
        })
        .collect()
}
