use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgentId, Good};
use crate::values::Money;

/// One agent's demand for its consumption good in the current period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    pub consumer: AgentId,
    pub good: Good,
    /// Money available for this good; spent down while matching
    pub budget: Money,
}

impl Demand {
    pub fn new(consumer: AgentId, good: Good, budget: Money) -> Self {
        Self {
            consumer,
            good,
            budget,
        }
    }

    /// True once nothing is left to spend
    pub fn is_exhausted(&self) -> bool {
        self.budget <= Decimal::ZERO
    }
}
