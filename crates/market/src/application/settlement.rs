//! Settlement
//!
//! Applies matched deals to agent balances, one deal at a time and in
//! matching order, then records each one in the ledger.

use bazaar_core::{Agent, Deal, Ledger, Money, Period, TradeRecord};
use log::debug;
use rust_decimal::Decimal;

use crate::error::{EngineError, Result, invariant};

/// What a settlement pass moved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementSummary {
    pub deals_settled: usize,
    pub money_moved: Money,
}

/// Settle `deals` for `period`
///
/// Seller: money up, stock down. Buyer: money down, goods up. Each deal is
/// fully applied before the next, so an agent selling and buying in the same
/// period sees its balances accumulate correctly.
///
/// Fails on the first deal that is malformed or would drive a balance
/// negative, and if money is not conserved overall.
pub fn settle(
    agents: &mut [Agent],
    ledger: &mut Ledger,
    deals: &[Deal],
    period: Period,
) -> Result<SettlementSummary> {
    let money_before = total_money(agents);
    let mut summary = SettlementSummary::default();

    for deal in deals {
        apply_deal(agents, deal)?;
        ledger.append(TradeRecord::from_deal(period, deal));

        summary.deals_settled += 1;
        summary.money_moved += deal.notional();
    }

    let money_after = total_money(agents);
    if money_after != money_before {
        return Err(EngineError::ConservationViolation {
            before: money_before,
            after: money_after,
        });
    }

    debug!(
        "Period {}: settled {} deals moving {}",
        period, summary.deals_settled, summary.money_moved
    );

    Ok(summary)
}

fn apply_deal(agents: &mut [Agent], deal: &Deal) -> Result<()> {
    let malformed = || EngineError::MalformedDeal {
        seller: deal.seller,
        buyer: deal.buyer,
        price: deal.price,
        qty: deal.qty,
    };

    if !deal.is_well_formed() || deal.seller == deal.buyer {
        return Err(malformed());
    }

    let (seller, buyer) = (deal.seller.index(), deal.buyer.index());
    if seller >= agents.len() || buyer >= agents.len() {
        return Err(invariant(format!(
            "deal references unknown agent ({} -> {})",
            deal.seller, deal.buyer
        )));
    }
    if agents[seller].produces != deal.good || agents[buyer].consumes != deal.good {
        return Err(malformed());
    }

    let cost = deal.price.checked_mul(deal.qty).ok_or_else(malformed)?;
    if cost > agents[buyer].money {
        return Err(invariant(format!(
            "{} cannot pay {} for {} {}",
            agents[buyer].name, cost, deal.qty, deal.good
        )));
    }

    agents[seller]
        .record_sale(deal.qty, cost)
        .map_err(|e| invariant(format!("{}: {}", agents[seller].name, e)))?;
    agents[buyer]
        .record_purchase(deal.qty, cost)
        .map_err(|e| invariant(format!("{}: {}", agents[buyer].name, e)))?;

    Ok(())
}

fn total_money(agents: &[Agent]) -> Money {
    agents.iter().map(|a| a.money).fold(Decimal::ZERO, |acc, m| acc + m)
}
