//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// A lookup that finds nothing is not an error; it is represented as `None`
/// by the callers that perform it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A validation error in the request parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
