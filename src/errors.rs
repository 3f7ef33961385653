//! Shared error types used across submodules.

use thiserror::Error;

use crate::uri::CodeUriError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum DevLinkError {
    /// Wraps loadable-code URI parsing errors.
    #[error(transparent)]
    CodeUri(#[from] CodeUriError),
    /// Raised when a datum crossing the model boundary is malformed.
    #[error("boundary error: {0}")]
    Boundary(String),
}
