//! Bazaar Runner - Economy Simulation Driver
//!
//! Everything around the market engine needed for a run:
//!
//! - **Bootstrap**: Roster construction and money allocation
//! - **Config**: JSON configuration
//! - **Simulation**: Multi-period orchestration and results
//! - **Report**: Text formatting of agents, ledger and results
//!
//! ## Period flow
//!
//! ```text
//!   ┌───────────┐    ┌──────────────────────────────┐    ┌──────────┐    ┌─────────┐
//!   │  Produce  │ ─▶ │ Trade: demands, offers,      │ ─▶ │  Settle  │ ─▶ │ Consume │
//!   │           │    │ one auction per good         │    │ + ledger │    │         │
//!   └───────────┘    └──────────────────────────────┘    └──────────┘    └─────────┘
//!                                  ▲                           │
//!                                  └──── last cleared prices ──┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod report;
pub mod simulation;

// Re-export main types
pub use bootstrap::{BootstrapConfig, build_roster, producers_of};
pub use config::{ConfigError, SimulationConfig};
pub use simulation::{Simulation, SimulationResults};
