//! Error types for the sc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Insufficient input: {0}")]
    InputIncomplete(String),

    /// A single point could not be resolved; carries the point's error text.
    #[error("{0}")]
    Point(String),

    #[error(transparent)]
    Catalog(#[from] sc_balance::CatalogError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sc-app operations.
pub type AppResult<T> = Result<T, AppError>;
