//! Property table and resolution errors.

use sc_core::CoreError;
use thiserror::Error;

/// Result type for property table queries.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by a property table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Input pair outside the substance's valid domain, or not a consistent state.
    #[error("{what}")]
    Domain { what: String },

    /// Invalid argument (non-finite, negative pressure, quality outside [0, 1]).
    #[error("invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Query not offered by this table.
    #[error("not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend failed after accepting the input.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// Backend produced a non-finite value.
    #[error("non-finite value for {what}")]
    NonFinite { what: &'static str },
}

impl TableError {
    /// Whether the table rejected the physical state itself rather than failing internally.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. } | Self::InvalidArg { .. })
    }
}

impl From<CoreError> for TableError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, .. } => TableError::NonFinite { what },
            err @ CoreError::NotPositive { .. } => TableError::Domain {
                what: err.to_string(),
            },
        }
    }
}

/// Why a point could not be resolved.
///
/// Never returned to callers of the resolver; its message ends up in `Point::error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Calculation error: {0}. Check the consistency of the input data.")]
    InconsistentState(TableError),

    #[error("Unexpected error: {0}")]
    Unexpected(TableError),
}

impl From<TableError> for ResolveError {
    fn from(err: TableError) -> Self {
        if err.is_domain() {
            ResolveError::InconsistentState(err)
        } else {
            ResolveError::Unexpected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_inconsistent_state() {
        let err: ResolveError = TableError::Domain {
            what: "pressure above critical".into(),
        }
        .into();
        assert!(matches!(err, ResolveError::InconsistentState(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("Calculation error: pressure above critical"));
        assert!(msg.ends_with("Check the consistency of the input data."));
    }

    #[test]
    fn backend_errors_are_unexpected() {
        let err: ResolveError = TableError::Backend {
            message: "CoolProp failed".into(),
        }
        .into();
        assert!(matches!(err, ResolveError::Unexpected(_)));
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn core_error_conversion() {
        let err: TableError = CoreError::NonFinite {
            what: "enthalpy",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err, TableError::NonFinite { what: "enthalpy" });
        assert!(!err.is_domain());

        let err: TableError = CoreError::NotPositive { what: "pressure" }.into();
        assert!(err.is_domain());
        assert_eq!(err.to_string(), "pressure must be positive");
    }
}
