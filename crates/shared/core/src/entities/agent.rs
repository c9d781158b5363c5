use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Demand, Good};
use crate::pricing;
use crate::values::{Money, Price, Quantity};

/// Default percentage step of the adaptive pricing rule
pub const DEFAULT_PRICE_SENSITIVITY: Decimal = Decimal::TEN;

/// Identifier of an agent: its position in the economy's roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl AgentId {
    /// Position of the agent in the roster
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Economic agent: produces one good, consumes the other
///
/// Inventories and money only change through `produce`, `consume`,
/// `record_sale` and `record_purchase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    /// Good added to `product_qty` every period
    pub produces: Good,
    /// Good bought on the market and consumed at period end
    pub consumes: Good,
    pub production_rate: Quantity,
    /// Unsold production carried between periods
    pub product_qty: Quantity,
    /// Consumption good bought this period
    pub good_qty: Quantity,
    pub money: Money,
    /// Percentage step applied to the last cleared price
    pub price_sensitivity: Decimal,
}

impl Agent {
    /// Create a new agent with empty inventories
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        produces: Good,
        consumes: Good,
        production_rate: Quantity,
        money: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            produces,
            consumes,
            production_rate,
            product_qty: Decimal::ZERO,
            good_qty: Decimal::ZERO,
            money,
            price_sensitivity: DEFAULT_PRICE_SENSITIVITY,
        }
    }

    /// Set the pricing step (percent)
    pub fn with_price_sensitivity(mut self, sensitivity: Decimal) -> Self {
        self.price_sensitivity = sensitivity;
        self
    }

    pub fn produce(&mut self) {
        self.product_qty += self.production_rate;
    }

    /// Consume everything bought this period
    pub fn consume(&mut self) {
        self.good_qty = Decimal::ZERO;
    }

    /// Snapshot of this period's demand, budgeted with all money on hand
    pub fn demand(&self) -> Demand {
        Demand::new(self.id, self.consumes, self.money)
    }

    /// True when more stock is held than one period produces
    pub fn has_surplus(&self) -> bool {
        self.product_qty > self.production_rate
    }

    /// Asking price for this period's offer
    ///
    /// Without a previous clearing price (or with a zero one) the agent asks
    /// the sell-out price `money / product_qty`. Otherwise the last price is
    /// lowered when stock piled up and raised when it cleared.
    ///
    /// Returns `None` if the agent has nothing to sell or the price cannot
    /// be represented.
    pub fn price_quote(&self, last_cleared_price: Option<Price>, scale: u32) -> Option<Price> {
        if self.product_qty <= Decimal::ZERO {
            return None;
        }

        match last_cleared_price.filter(|price| !price.is_zero()) {
            None => pricing::sell_out_price(self.money, self.product_qty, scale),
            Some(last) => {
                pricing::adjust_price(last, self.has_surplus(), self.price_sensitivity, scale)
            }
        }
    }

    /// Hand over sold stock and collect the proceeds
    pub fn record_sale(&mut self, qty: Quantity, proceeds: Money) -> Result<(), &'static str> {
        if qty > self.product_qty {
            return Err("Sale exceeds product stock");
        }
        self.product_qty -= qty;
        self.money += proceeds;
        Ok(())
    }

    /// Receive bought goods and pay for them
    pub fn record_purchase(&mut self, qty: Quantity, cost: Money) -> Result<(), &'static str> {
        if cost > self.money {
            return Err("Purchase exceeds available money");
        }
        self.money -= cost;
        self.good_qty += qty;
        Ok(())
    }
}
