/// Error type for element value operations.
///
/// Every variant signals a client programming error (wrong code, wrong
/// expected type, wrong index). None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// A single-value read found an empty collection or a null payload.
    #[error("element `{code}` has no value")]
    ValueMissing { code: String },

    /// A stored value cannot be coerced to the requested shape.
    #[error("type mismatch for element `{code}`: {reason}, got {actual}")]
    TypeMismatch {
        code: String,
        reason: String,
        actual: String,
    },

    /// An input value has no matching element value variant.
    #[error("unsupported element value type `{type_name}`")]
    UnsupportedValueType { type_name: String },

    /// An indexed validity read or write went past the collection end.
    #[error("index {index} out of range for element `{code}` with {len} values")]
    IndexOutOfRange {
        code: String,
        index: usize,
        len: usize,
    },
}

impl ElementError {
    pub(crate) fn mismatch(code: &str, reason: &str, actual: impl ToString) -> Self {
        Self::TypeMismatch {
            code: code.to_owned(),
            reason: reason.to_owned(),
            actual: actual.to_string(),
        }
    }

    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::ValueMissing { .. } => "value",
            Self::TypeMismatch { .. } => "type",
            Self::UnsupportedValueType { .. } => "type",
            Self::IndexOutOfRange { .. } => "lookup",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::ValueMissing { .. } => "ELEMENT_VALUE_MISSING",
            Self::TypeMismatch { .. } => "ELEMENT_TYPE_MISMATCH",
            Self::UnsupportedValueType { .. } => "ELEMENT_UNSUPPORTED_TYPE",
            Self::IndexOutOfRange { .. } => "ELEMENT_INDEX_OUT_OF_RANGE",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Always `false`: the same input yields the same error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ElementError::ValueMissing {
            code: "EV_NAME".into(),
        };
        assert_eq!(err.to_string(), "element `EV_NAME` has no value");

        let err = ElementError::mismatch("EV_AGE", "not a number", "STRING(\"abc\")");
        assert_eq!(
            err.to_string(),
            "type mismatch for element `EV_AGE`: not a number, got STRING(\"abc\")"
        );

        let err = ElementError::UnsupportedValueType {
            type_name: "boolean".into(),
        };
        assert_eq!(err.to_string(), "unsupported element value type `boolean`");

        let err = ElementError::IndexOutOfRange {
            code: "EV".into(),
            index: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "index 3 out of range for element `EV` with 1 values"
        );
    }

    #[test]
    fn codes_and_categories() {
        let cases = vec![
            (
                ElementError::ValueMissing { code: String::new() },
                "ELEMENT_VALUE_MISSING",
                "value",
            ),
            (
                ElementError::mismatch("", "", ""),
                "ELEMENT_TYPE_MISMATCH",
                "type",
            ),
            (
                ElementError::UnsupportedValueType {
                    type_name: String::new(),
                },
                "ELEMENT_UNSUPPORTED_TYPE",
                "type",
            ),
            (
                ElementError::IndexOutOfRange {
                    code: String::new(),
                    index: 0,
                    len: 0,
                },
                "ELEMENT_INDEX_OUT_OF_RANGE",
                "lookup",
            ),
        ];
        for (err, code, category) in cases {
            assert_eq!(err.code(), code);
            assert_eq!(err.category(), category);
            assert!(!err.is_retryable());
        }
    }
}
