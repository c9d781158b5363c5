use bazaar_core::{AgentId, Money, Price, Quantity};
use thiserror::Error;

/// Errors raised by the market engine
///
/// None of these are recoverable: configuration errors are reported before
/// the first period runs, everything else aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Malformed deal: seller={seller}, buyer={buyer}, price={price}, qty={qty}")]
    MalformedDeal {
        seller: AgentId,
        buyer: AgentId,
        price: Price,
        qty: Quantity,
    },

    #[error("Money not conserved: {before} before settlement, {after} after")]
    ConservationViolation { before: Money, after: Money },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
