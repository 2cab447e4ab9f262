//! sc-core: stable foundation for steamcycle.
//!
//! Contains:
//! - units (display/table energy conversion + uom constructors)
//! - numeric (finiteness, sign and range checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
