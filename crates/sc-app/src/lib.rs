//! Shared application service layer for steamcycle.
//!
//! Frontends go through [`CycleService`] for the four boundary operations:
//! resolving one point, expanding a cycle, listing calculations and
//! executing one. Transport (JSON, CLI arguments) stays in the frontends.

pub mod config;
pub mod error;
pub mod service;

pub use config::{AppConfig, FluidBackend};
pub use error::{AppError, AppResult};
pub use service::{CycleService, ExecuteRequest, ExpandRequest, PointEntry, point_vocabulary};
