use bazaar_core::{Deal, Demand, Good, Money, Offer, Quantity};
use bazaar_ports::{ClearingAlgorithm, DemandShuffler, EngineError, EngineResult};
use log::trace;
use rust_decimal::Decimal;

/// Periodic double auction with randomized demand priority
///
/// For each good:
/// 1. Demands are shuffled (no consumer is structurally privileged)
/// 2. Offers are sorted by ascending price (stable for equal prices)
/// 3. Each demand buys from the cheapest remaining offer, as many whole
///    units as its budget allows, until the budget runs out, the offers run
///    out, or the cheapest offer is more than the budget left
///
/// Zero-priced offers are skipped. Budget that cannot buy one more unit is
/// forfeited for the period.
pub struct PeriodicDoubleAuction {
    shuffler: Box<dyn DemandShuffler>,
}

impl PeriodicDoubleAuction {
    pub fn new(shuffler: Box<dyn DemandShuffler>) -> Self {
        Self { shuffler }
    }

    /// Name of the injected shuffler
    pub fn shuffler_name(&self) -> &str {
        self.shuffler.name()
    }
}

impl ClearingAlgorithm for PeriodicDoubleAuction {
    fn name(&self) -> &str {
        "Periodic Double Auction"
    }

    fn clear(
        &mut self,
        demands: &[Demand],
        offers: &[Offer],
        good: Good,
    ) -> EngineResult<Vec<Deal>> {
        let mut demands: Vec<Demand> = demands.iter().filter(|d| d.good == good).cloned().collect();
        let mut offers: Vec<Offer> = offers.iter().filter(|o| o.good == good).cloned().collect();

        self.shuffler.shuffle(&mut demands);
        offers.sort_by(|a, b| a.price.cmp(&b.price));

        let mut deals = Vec::new();
        // Offers before the cursor are exhausted or void and never revisited
        let mut cursor = 0;

        for demand in &mut demands {
            while !demand.is_exhausted() && cursor < offers.len() {
                let offer = &mut offers[cursor];

                if offer.price > demand.budget {
                    trace!(
                        "[{}] {} cannot afford {} from {} (budget {})",
                        good, demand.consumer, offer.price, offer.producer, demand.budget
                    );
                    break;
                }

                if offer.is_void() || offer.is_exhausted() {
                    cursor += 1;
                    continue;
                }

                let (qty, spent) = fill(demand, offer)?;
                let deal = Deal::new(offer.producer, demand.consumer, good, offer.price, qty);
                trace!(
                    "[{}] {} buys {} from {} at {}",
                    good, deal.buyer, deal.qty, deal.seller, deal.price
                );
                deals.push(deal);

                offer.qty -= qty;
                demand.budget -= spent;

                if offer.is_exhausted() {
                    cursor += 1;
                }
            }
        }

        Ok(deals)
    }
}

/// Units `demand` buys from `offer` and what they cost
///
/// Takes the whole offer when the budget covers it, otherwise as many whole
/// units as the budget allows. Arithmetic that would leave the `Decimal`
/// range is reported instead of panicking.
fn fill(demand: &Demand, offer: &Offer) -> EngineResult<(Quantity, Money)> {
    let overflow = || {
        EngineError::InvariantViolation(format!(
            "arithmetic overflow: buyer {} budget {} against seller {} selling {} at {}",
            demand.consumer, demand.budget, offer.producer, offer.qty, offer.price
        ))
    };

    let mut qty = match offer.qty.checked_mul(offer.price) {
        Some(cost) if cost <= demand.budget => offer.qty,
        // Budget is below the full cost, so the quotient stays below offer.qty
        _ => demand
            .budget
            .checked_div(offer.price)
            .ok_or_else(overflow)?
            .floor()
            .min(offer.qty),
    };
    // Decimal division rounds at 28 digits and may land one unit high
    let mut spent = qty.checked_mul(offer.price).ok_or_else(overflow)?;
    if spent > demand.budget {
        qty -= Decimal::ONE;
        spent = qty.checked_mul(offer.price).ok_or_else(overflow)?;
    }

    if qty <= Decimal::ZERO {
        return Err(EngineError::InvariantViolation(format!(
            "zero quantity matched: buyer {} budget {} against seller {} at {}",
            demand.consumer, demand.budget, offer.producer, offer.price
        )));
    }

    Ok((qty, spent))
}
