//! Bazaar Ports
//!
//! Port definitions (traits) for the Bazaar economy.
//! These define the boundaries between the market engine and the
//! pluggable pieces it drives (clearing algorithm, randomness source).

mod clearing;
mod error;
mod shuffle;

pub use clearing::ClearingAlgorithm;
pub use error::{EngineError, EngineResult};
pub use shuffle::DemandShuffler;
