//! Bazaar Matching Algorithms
//!
//! Market clearing for the Bazaar economy, plus the randomness sources used
//! to order demands before each clearing round.

mod double_auction;
mod shuffle;

pub use double_auction::PeriodicDoubleAuction;
pub use shuffle::{RosterOrder, SeededShuffler};

// Re-export the traits from ports for convenience
pub use bazaar_ports::{ClearingAlgorithm, DemandShuffler, EngineError, EngineResult};

/// Factory function to create a demand shuffler
///
/// A seed gives a reproducible run; without one the generator is seeded
/// from the operating system.
pub fn create_shuffler(seed: Option<u64>) -> Box<dyn DemandShuffler> {
    match seed {
        Some(seed) => Box::new(SeededShuffler::new(seed)),
        None => Box::new(SeededShuffler::from_entropy()),
    }
}
