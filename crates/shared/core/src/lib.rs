//! Bazaar Core Domain
//!
//! Pure domain types for the Bazaar two-good economy.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod pricing;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Agent, AgentId, DEFAULT_PRICE_SENSITIVITY, Deal, Demand, Good, Ledger, Offer, TradeRecord,
};
pub use values::{DEFAULT_PRICE_SCALE, Money, Period, Price, Quantity};
