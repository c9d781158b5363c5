use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgentId, Good};
use crate::values::{Price, Quantity};

/// One agent's offer of its whole unsold stock at a single asking price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub producer: AgentId,
    pub good: Good,
    /// Units still for sale; reduced while matching
    pub qty: Quantity,
    pub price: Price,
}

impl Offer {
    pub fn new(producer: AgentId, good: Good, qty: Quantity, price: Price) -> Self {
        Self {
            producer,
            good,
            qty,
            price,
        }
    }

    /// True once every unit has been sold
    pub fn is_exhausted(&self) -> bool {
        self.qty <= Decimal::ZERO
    }

    /// Zero-priced offers are never matched
    pub fn is_void(&self) -> bool {
        self.price.is_zero()
    }
}
