use bazaar_core::Demand;
use bazaar_ports::DemandShuffler;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Uniform shuffle driven by a standard RNG
pub struct SeededShuffler {
    rng: StdRng,
}

impl SeededShuffler {
    /// Create with a specific seed for reproducible simulations
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DemandShuffler for SeededShuffler {
    fn shuffle(&mut self, demands: &mut [Demand]) {
        demands.shuffle(&mut self.rng);
    }

    fn name(&self) -> &str {
        "Seeded"
    }
}

/// Leaves demands in roster order
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOrder;

impl DemandShuffler for RosterOrder {
    fn shuffle(&mut self, _demands: &mut [Demand]) {}

    fn name(&self) -> &str {
        "Roster order"
    }
}
