use bazaar_core::{Deal, Demand, Good, Offer};

use crate::error::EngineResult;

/// Port for market clearing algorithms
///
/// An algorithm clears one good at a time. The engine calls it once per good
/// per period and concatenates the deals.
pub trait ClearingAlgorithm: Send {
    /// Match demands against offers for `good`
    ///
    /// Inputs may contain entries for other goods; they must be ignored.
    /// Returned deals are in the order they were matched.
    fn clear(&mut self, demands: &[Demand], offers: &[Offer], good: Good)
    -> EngineResult<Vec<Deal>>;

    /// Get the name of the algorithm
    fn name(&self) -> &str;
}
