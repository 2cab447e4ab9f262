//! Mass and energy balances over the regenerative steam cycle.
//!
//! Each [`BalanceModule`] encodes one plant component's conservation law. It
//! reads point enthalpies from a [`Cycle`](sc_steam::Cycle) and solves for
//! whichever unknown the known [`Params`] allow. Modules never fail: when
//! their preconditions are unmet they leave the params untouched.
//!
//! The [`BalanceCatalog`] is the registry used by frontends to discover and
//! run calculations by identifier.

pub mod catalog;
pub mod chained;
pub mod common;
pub mod condenser;
pub mod error;
pub mod net_power;
pub mod params;
pub mod preheater;
pub mod regeneration;
pub mod steam_generator;
pub mod traits;

pub use catalog::{
    BalanceCatalog, CalculationDescriptor, CalculationInputs, CalculationResult, CatalogEntry,
    standard_catalog,
};
pub use chained::{ChainStep, ChainedSequencer};
pub use condenser::CondenserBalance;
pub use error::{CatalogError, CatalogResult};
pub use net_power::NetPower;
pub use params::Params;
pub use preheater::MassBalancePreheater;
pub use regeneration::RegenerativeGain;
pub use steam_generator::SteamGeneratorPerformance;
pub use traits::BalanceModule;
