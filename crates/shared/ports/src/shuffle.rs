use bazaar_core::Demand;

/// Port for the randomness used to order demands before matching
///
/// Injecting the source keeps runs reproducible:
/// - Seeded generator for repeatable simulations
/// - Entropy-seeded generator for free-running simulations
/// - Identity ordering for order-independent tests
pub trait DemandShuffler: Send {
    /// Reorder demands in place
    fn shuffle(&mut self, demands: &mut [Demand]);

    /// Get the shuffler's name for debugging
    fn name(&self) -> &str {
        "DemandShuffler"
    }
}
