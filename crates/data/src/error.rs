/// Error type for property-path operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// A required read found nothing, or a write could not reach its slot.
    #[error("property `{path}` doesn't exist")]
    NotFound { path: String },

    /// The path is empty or addresses a list with a non-index segment.
    #[error("invalid property path `{path}`: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The stored value cannot be read as the requested shape.
    #[error("property `{path}` is not {expected}: got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A value handed to `update` has no storable form.
    #[error("unsupported value `{value}`: {reason}")]
    UnsupportedValue { value: String, reason: String },

    /// A configured navigator limit was exceeded.
    #[error("{limit} limit exceeded: {actual} > {max}")]
    LimitExceeded {
        limit: String,
        max: usize,
        actual: usize,
    },
}

impl PropertyError {
    pub(crate) fn not_found(path: &str) -> Self {
        Self::NotFound {
            path: path.to_owned(),
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn limit_exceeded(limit: &str, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.to_owned(),
            max,
            actual,
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NotFound { .. } => "lookup",
            Self::InvalidPath { .. } => "format",
            Self::TypeMismatch { .. } => "type",
            Self::UnsupportedValue { .. } => "value",
            Self::LimitExceeded { .. } => "limit",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "PROPERTY_NOT_FOUND",
            Self::InvalidPath { .. } => "PROPERTY_INVALID_PATH",
            Self::TypeMismatch { .. } => "PROPERTY_TYPE_MISMATCH",
            Self::UnsupportedValue { .. } => "PROPERTY_UNSUPPORTED_VALUE",
            Self::LimitExceeded { .. } => "PROPERTY_LIMIT_EXCEEDED",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
