use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgentId, Good};
use crate::values::{Money, Price, Quantity};

/// A matched trade, waiting to be settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub seller: AgentId,
    pub buyer: AgentId,
    pub good: Good,
    pub price: Price,
    pub qty: Quantity,
}

impl Deal {
    pub fn new(seller: AgentId, buyer: AgentId, good: Good, price: Price, qty: Quantity) -> Self {
        Self {
            seller,
            buyer,
            good,
            price,
            qty,
        }
    }

    /// Money changing hands (price * qty)
    pub fn notional(&self) -> Money {
        self.price * self.qty
    }

    /// A settleable deal moves at least part of a unit at a positive price
    pub fn is_well_formed(&self) -> bool {
        self.qty > Decimal::ZERO && self.price > Decimal::ZERO
    }
}
