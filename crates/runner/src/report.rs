//! Text reporting for agents, ledger entries and run results

use bazaar_core::{Agent, AgentId, Ledger, TradeRecord};
use bazaar_market::PeriodSummary;

use crate::simulation::SimulationResults;

/// One line of agent state: `Agent#1 Prod:A-0 Good:B-0 Money:10`
pub fn agent_line(agent: &Agent) -> String {
    format!(
        "{} Prod:{}-{} Good:{}-{} Money:{}",
        agent.name,
        agent.produces,
        agent.product_qty.normalize(),
        agent.consumes,
        agent.good_qty.normalize(),
        agent.money.normalize()
    )
}

pub fn agents_report(agents: &[Agent]) -> String {
    agents.iter().map(agent_line).collect::<Vec<_>>().join("\n")
}

fn agent_name(agents: &[Agent], id: AgentId) -> String {
    agents
        .get(id.index())
        .map(|a| a.name.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

/// One ledger row: `P1 Agent#1 -> Agent#2 A 2 @ 5 = 10`
pub fn ledger_line(record: &TradeRecord, agents: &[Agent]) -> String {
    format!(
        "P{} {} -> {} {} {} @ {} = {}",
        record.period,
        agent_name(agents, record.seller),
        agent_name(agents, record.buyer),
        record.good,
        record.qty.normalize(),
        record.price.normalize(),
        record.total_money.normalize()
    )
}

pub fn ledger_report(ledger: &Ledger, agents: &[Agent]) -> String {
    ledger
        .records()
        .iter()
        .map(|r| ledger_line(r, agents))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per period: deals and average price per good
pub fn period_line(summary: &PeriodSummary) -> String {
    let goods: Vec<String> = summary
        .goods
        .iter()
        .map(|a| match a.average_price() {
            Some(price) => format!(
                "{}: {} deals, {} units @ {}",
                a.good,
                a.deals,
                a.qty.normalize(),
                price.round_dp(2).normalize()
            ),
            None => format!("{}: no trade", a.good),
        })
        .collect();

    format!(
        "Period {} | {} | moved {}",
        summary.period,
        goods.join(" | "),
        summary.money_moved.normalize()
    )
}

pub fn results_report(results: &SimulationResults) -> String {
    let mut lines = vec![format!(
        "Periods: {}  Deals: {}  Money: {}",
        results.periods_run,
        results.total_deals,
        results.total_money.normalize()
    )];

    for (good, qty) in &results.volume_by_good {
        let price = results
            .last_price_by_good
            .get(good)
            .map(|p| p.normalize().to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "Good {}: volume {}, last price {}",
            good,
            qty.normalize(),
            price
        ));
    }

    if let Some(error) = &results.error {
        lines.push(format!("Stopped early: {}", error));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{Deal, Good};
    use rust_decimal_macros::dec;

    fn agents() -> Vec<Agent> {
        vec![
            Agent::new(AgentId(0), "Agent#1", Good::A, Good::B, dec!(2), dec!(10)),
            Agent::new(AgentId(1), "Agent#2", Good::B, Good::A, dec!(2), dec!(10)),
        ]
    }

    #[test]
    fn test_agent_line() {
        let mut agent = agents().remove(0);
        agent.money = dec!(55.00);

        assert_eq!(agent_line(&agent), "Agent#1 Prod:A-0 Good:B-0 Money:55");
    }

    #[test]
    fn test_ledger_line() {
        let deal = Deal::new(AgentId(0), AgentId(1), Good::A, dec!(5.50), dec!(2));
        let record = TradeRecord::from_deal(3, &deal);

        assert_eq!(
            ledger_line(&record, &agents()),
            "P3 Agent#1 -> Agent#2 A 2 @ 5.5 = 11"
        );
    }

    #[test]
    fn test_period_line() {
        let deals = vec![Deal::new(AgentId(0), AgentId(1), Good::A, dec!(5), dec!(2))];
        let summary = PeriodSummary::from_deals(1, 2, 2, &deals, dec!(10), dec!(20));

        assert_eq!(
            period_line(&summary),
            "Period 1 | A: 1 deals, 2 units @ 5 | B: no trade | moved 10"
        );
    }
}
