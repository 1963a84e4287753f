//! Write-side classification of caller values.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tasklane_core::{DocumentItem, ElementValue, PrincipalItem};

use crate::error::ElementError;

/// A value handed to the engine for storage.
///
/// Each variant maps onto exactly one [`ElementValue`] variant, except
/// [`ElementInput::Json`], which is classified by its JSON kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementInput {
    /// Stored as `STRING`.
    Text(String),
    /// Stored as `NUMBER`.
    Number(f64),
    /// Stored as `STRING` in ISO-8601 calendar-date form.
    Date(NaiveDate),
    /// Stored as `OBJECT`.
    Object(Map<String, Value>),
    /// Stored as `DOCUMENT`.
    Document(DocumentItem),
    /// Stored as `PRINCIPAL`.
    Principal(PrincipalItem),
    /// Strings, numbers and objects are accepted; anything else is rejected.
    Json(Value),
}

impl ElementInput {
    /// Runtime type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Object(_) => "object",
            Self::Document(_) => "document",
            Self::Principal(_) => "principal",
            Self::Json(value) => json_kind(value),
        }
    }

    /// Classify into the element value variant that will be stored.
    pub fn into_element_value(self) -> Result<ElementValue, ElementError> {
        Ok(match self {
            Self::Text(text) => ElementValue::string(text),
            Self::Number(number) => finite(number)?,
            Self::Date(date) => ElementValue::string(date.format("%Y-%m-%d").to_string()),
            Self::Object(map) => ElementValue::object(map),
            Self::Document(document) => ElementValue::document(document),
            Self::Principal(principal) => ElementValue::principal(principal),
            Self::Json(Value::String(text)) => ElementValue::string(text),
            Self::Json(Value::Object(map)) => ElementValue::object(map),
            Self::Json(Value::Number(number)) => match number.as_f64() {
                Some(number) => finite(number)?,
                None => {
                    return Err(ElementError::UnsupportedValueType {
                        type_name: "number".into(),
                    });
                }
            },
            Self::Json(other) => {
                return Err(ElementError::UnsupportedValueType {
                    type_name: json_kind(&other).into(),
                });
            }
        })
    }
}

/// NaN and infinities have no JSON encoding, so they would not survive a save.
fn finite(number: f64) -> Result<ElementValue, ElementError> {
    if number.is_finite() {
        Ok(ElementValue::number(number))
    } else {
        Err(ElementError::UnsupportedValueType {
            type_name: "non-finite number".into(),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<String> for ElementInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ElementInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for ElementInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for ElementInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for ElementInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for ElementInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for ElementInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<NaiveDate> for ElementInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Map<String, Value>> for ElementInput {
    fn from(value: Map<String, Value>) -> Self {
        Self::Object(value)
    }
}

impl From<DocumentItem> for ElementInput {
    fn from(value: DocumentItem) -> Self {
        Self::Document(value)
    }
}

impl From<PrincipalItem> for ElementInput {
    fn from(value: PrincipalItem) -> Self {
        Self::Principal(value)
    }
}

impl From<Value> for ElementInput {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}
