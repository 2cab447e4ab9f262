//! Error types for catalog dispatch.

use thiserror::Error;

/// Errors raised when dispatching a calculation by identifier.
///
/// Balance modules themselves never fail; these are the only errors the
/// balance layer reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Calculation '{0}' not found")]
    UnknownCalculationId(String),

    #[error("Calculation '{0}' is not implemented")]
    CalculationNotImplemented(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
