mod agent;
mod deal;
mod demand;
mod good;
mod ledger;
mod offer;

pub use agent::{Agent, AgentId, DEFAULT_PRICE_SENSITIVITY};
pub use deal::Deal;
pub use demand::Demand;
pub use good::Good;
pub use ledger::{Ledger, TradeRecord};
pub use offer::Offer;
