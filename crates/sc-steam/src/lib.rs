//! sc-steam: water/steam state resolution for steamcycle.
//!
//! Provides:
//! - `PropertyTable` trait: the capability contract of a water/steam table
//! - CoolProp backend (via `rfluids`) implementing that contract
//! - Cycle point vocabulary and the `Point` state record
//! - `StateResolver`: completes a point from any admissible pair of knowns
//! - `EfficiencyExpander`: turbine-leg expansions and isentropic efficiencies
//!
//! # Units
//!
//! Points carry pressure in bar, temperature in °C and enthalpy/entropy in
//! kcal. Tables work in bar, °C and kJ. Conversion happens only at the table
//! boundary, inside the resolver.
//!
//! # Example
//!
//! ```no_run
//! use sc_steam::{CoolPropTable, Point, StateResolver};
//!
//! let resolver = StateResolver::new(CoolPropTable::new());
//! let point = Point {
//!     p: Some(40.0),
//!     t: Some(400.0),
//!     ..Point::default()
//! };
//!
//! let resolved = resolver.resolve(&point);
//! println!("h = {:?} kcal/kg", resolved.h);
//! ```

pub mod coolprop;
pub mod error;
pub mod expansion;
pub mod point;
pub mod resolver;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for ergonomics
pub use coolprop::CoolPropTable;
pub use error::{ResolveError, TableError, TableResult};
pub use expansion::{
    CycleExpansion, Efficiencies, EfficiencyExpander, LegOutcome, Stage, TurbineLeg,
    extraction_admissible, isentropic_efficiency, real_enthalpy, solve_leg,
};
pub use point::{Cycle, Point, PointId};
pub use resolver::{KnownPair, ResolverSettings, SATURATION_TOLERANCE_C, StateResolver};
pub use table::PropertyTable;
