//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum GeoanaError {
    /// Raised when a physical parameter fails validation.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What the constraint was and how it was violated.
        reason: String,
    },
    /// Raised when an evaluation point coincides with a source singularity.
    #[error("evaluation point coincides with a source singularity at ({0}, {1}, {2})")]
    Singularity(f64, f64, f64),
    /// Raised when a special-function argument is outside its domain.
    #[error("argument out of domain: {0}")]
    Domain(String),
    /// Wraps I/O failures from the export helpers.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoanaError>;
