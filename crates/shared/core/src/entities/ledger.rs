use serde::{Deserialize, Serialize};

use super::{AgentId, Deal, Good};
use crate::values::{Money, Period, Price, Quantity};

/// Settled trade as recorded in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub period: Period,
    pub seller: AgentId,
    pub buyer: AgentId,
    pub good: Good,
    pub price: Price,
    pub qty: Quantity,
    /// price * qty
    pub total_money: Money,
}

impl TradeRecord {
    /// Record a deal settled during `period`
    pub fn from_deal(period: Period, deal: &Deal) -> Self {
        Self {
            period,
            seller: deal.seller,
            buyer: deal.buyer,
            good: deal.good,
            price: deal.price,
            qty: deal.qty,
            total_money: deal.notional(),
        }
    }
}

/// Append-only trade history
///
/// Records are never modified or removed; the only way to change a ledger
/// is `append`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<TradeRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: TradeRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_for_seller(&self, seller: AgentId) -> impl Iterator<Item = &TradeRecord> {
        self.records.iter().filter(move |r| r.seller == seller)
    }

    /// Most recent record with `seller` on the selling side
    ///
    /// Picks the highest period; among records of the same period the one
    /// appended last wins.
    pub fn last_sale(&self, seller: AgentId) -> Option<&TradeRecord> {
        self.records_for_seller(seller).max_by_key(|r| r.period)
    }

    /// Price of the seller's most recent sale, if it ever sold anything
    pub fn last_cleared_price(&self, seller: AgentId) -> Option<Price> {
        self.last_sale(seller).map(|r| r.price)
    }

    /// Most recent clearing price for a good across all sellers
    pub fn last_price_for_good(&self, good: Good) -> Option<Price> {
        self.records
            .iter()
            .filter(|r| r.good == good)
            .max_by_key(|r| r.period)
            .map(|r| r.price)
    }
}
