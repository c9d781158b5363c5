// Re-export domain types from bazaar-core
pub use bazaar_core::{
    Agent, AgentId, DEFAULT_PRICE_SCALE, Deal, Demand, Good, Ledger, Money, Offer, Period, Price,
    Quantity, TradeRecord,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry
const MAX_PRICE_SCALE: u32 = 28;

/// Market-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Decimal places kept on quoted prices
    #[serde(default = "default_price_scale")]
    pub price_scale: u32,
}

fn default_price_scale() -> u32 {
    DEFAULT_PRICE_SCALE
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            price_scale: default_price_scale(),
        }
    }
}

impl MarketConfig {
    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.price_scale > MAX_PRICE_SCALE {
            return Err(format!(
                "price scale {} exceeds {}",
                self.price_scale, MAX_PRICE_SCALE
            ));
        }
        Ok(())
    }
}

/// Trading activity in one good during one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodActivity {
    pub good: Good,
    pub deals: usize,
    pub qty: Quantity,
    pub money: Money,
}

impl GoodActivity {
    pub fn new(good: Good) -> Self {
        Self {
            good,
            deals: 0,
            qty: Decimal::ZERO,
            money: Decimal::ZERO,
        }
    }

    /// Add one deal to the tally
    pub fn record(&mut self, deal: &Deal) {
        self.deals += 1;
        self.qty += deal.qty;
        self.money += deal.notional();
    }

    /// Volume-weighted average price, if anything traded
    pub fn average_price(&self) -> Option<Price> {
        if self.qty.is_zero() {
            None
        } else {
            Some(self.money / self.qty)
        }
    }
}

/// Outcome of one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub demands: usize,
    pub offers: usize,
    /// Per good, in `Good::ALL` order
    pub goods: Vec<GoodActivity>,
    /// Money that changed hands in settlement
    pub money_moved: Money,
    /// Money held by all agents at period end
    pub total_money: Money,
}

impl PeriodSummary {
    /// Tally the deals of a finished period
    pub fn from_deals(
        period: Period,
        demands: usize,
        offers: usize,
        deals: &[Deal],
        money_moved: Money,
        total_money: Money,
    ) -> Self {
        let mut goods: Vec<GoodActivity> = Good::ALL.iter().map(|g| GoodActivity::new(*g)).collect();
        for deal in deals {
            if let Some(activity) = goods.iter_mut().find(|a| a.good == deal.good) {
                activity.record(deal);
            }
        }

        Self {
            period,
            demands,
            offers,
            goods,
            money_moved,
            total_money,
        }
    }

    /// Number of deals across both goods
    pub fn deal_count(&self) -> usize {
        self.goods.iter().map(|g| g.deals).sum()
    }

    /// Activity for one good
    pub fn activity(&self, good: Good) -> Option<&GoodActivity> {
        self.goods.iter().find(|a| a.good == good)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_tallies_per_good() {
        let deals = vec![
            Deal::new(AgentId(0), AgentId(1), Good::A, dec!(10), dec!(2)),
            Deal::new(AgentId(2), AgentId(1), Good::A, dec!(20), dec!(1)),
            Deal::new(AgentId(1), AgentId(0), Good::B, dec!(5), dec!(4)),
        ];

        let summary = PeriodSummary::from_deals(3, 3, 3, &deals, dec!(60), dec!(300));

        assert_eq!(summary.money_moved, dec!(60));

        assert_eq!(summary.deal_count(), 3);
        let a = summary.activity(Good::A).unwrap();
        assert_eq!(a.qty, dec!(3));
        assert_eq!(a.money, dec!(40));
        assert_eq!(a.average_price().unwrap().round_dp(2), dec!(13.33));
        let b = summary.activity(Good::B).unwrap();
        assert_eq!(b.average_price(), Some(dec!(5)));
    }

    #[test]
    fn test_empty_activity_has_no_price() {
        assert_eq!(GoodActivity::new(Good::A).average_price(), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(MarketConfig::default().validate().is_ok());
        assert!(MarketConfig { price_scale: 29 }.validate().is_err());
    }
}
