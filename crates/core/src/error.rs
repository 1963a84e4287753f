//! Core error types.

use thiserror::Error;

/// Errors raised while parsing core model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The text does not name a known principal type.
    #[error("unknown principal type `{0}`")]
    UnknownPrincipalType(String),
}
