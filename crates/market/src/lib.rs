// Application layer
pub mod application;

// Cross-cutting concerns
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use application::{Economy, SettlementSummary, build_demands, build_offers, settle};
pub use error::{EngineError, Result};
pub use model::{GoodActivity, MarketConfig, PeriodSummary};
