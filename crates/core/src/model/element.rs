//! Typed element values.
//!
//! An element is a multi-valued attribute attached to a task or process
//! under a *definition code*. Each value is one variant of [`ElementValue`]
//! and carries an advisory `valid` flag that is set by validation elsewhere
//! and never influences coercion.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::document::DocumentItem;
use super::principal::PrincipalItem;

/// Ordered element values keyed by definition code.
pub type ElementValueMap = HashMap<String, Vec<ElementValue>>;

/// A single typed element value.
///
/// Serialized with a `type` discriminator:
/// `{"type": "STRING", "value": "abc", "valid": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementValue {
    /// Free text.
    String {
        /// Payload.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        /// Validity flag.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        valid: Option<bool>,
    },
    /// Floating-point number.
    Number {
        /// Payload.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
        /// Validity flag.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        valid: Option<bool>,
    },
    /// Arbitrary JSON object.
    Object {
        /// Payload.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Map<String, Value>>,
        /// Validity flag.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        valid: Option<bool>,
    },
    /// Uploaded file reference.
    Document {
        /// Payload.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<DocumentItem>,
        /// Validity flag.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        valid: Option<bool>,
    },
    /// User or application reference.
    Principal {
        /// Payload.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<PrincipalItem>,
        /// Validity flag.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        valid: Option<bool>,
    },
}

/// Discriminator of an [`ElementValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementValueKind {
    /// `STRING`
    String,
    /// `NUMBER`
    Number,
    /// `OBJECT`
    Object,
    /// `DOCUMENT`
    Document,
    /// `PRINCIPAL`
    Principal,
}

impl ElementValueKind {
    /// Wire discriminator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Object => "OBJECT",
            Self::Document => "DOCUMENT",
            Self::Principal => "PRINCIPAL",
        }
    }
}

impl fmt::Display for ElementValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ElementValue {
    /// A `STRING` value with no validity flag.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: Some(value.into()),
            valid: None,
        }
    }

    /// A `NUMBER` value with no validity flag.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number {
            value: Some(value),
            valid: None,
        }
    }

    /// An `OBJECT` value with no validity flag.
    #[must_use]
    pub fn object(value: Map<String, Value>) -> Self {
        Self::Object {
            value: Some(value),
            valid: None,
        }
    }

    /// A `DOCUMENT` value with no validity flag.
    #[must_use]
    pub fn document(value: DocumentItem) -> Self {
        Self::Document {
            value: Some(value),
            valid: None,
        }
    }

    /// A `PRINCIPAL` value with no validity flag.
    #[must_use]
    pub fn principal(value: PrincipalItem) -> Self {
        Self::Principal {
            value: Some(value),
            valid: None,
        }
    }

    /// Set the validity flag, builder style.
    #[must_use]
    pub fn with_valid(mut self, valid: Option<bool>) -> Self {
        self.set_valid(valid);
        self
    }

    /// The variant discriminator.
    #[must_use]
    pub fn kind(&self) -> ElementValueKind {
        match self {
            Self::String { .. } => ElementValueKind::String,
            Self::Number { .. } => ElementValueKind::Number,
            Self::Object { .. } => ElementValueKind::Object,
            Self::Document { .. } => ElementValueKind::Document,
            Self::Principal { .. } => ElementValueKind::Principal,
        }
    }

    /// Discriminator name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The tri-state validity flag.
    #[must_use]
    pub fn valid(&self) -> Option<bool> {
        match self {
            Self::String { valid, .. }
            | Self::Number { valid, .. }
            | Self::Object { valid, .. }
            | Self::Document { valid, .. }
            | Self::Principal { valid, .. } => *valid,
        }
    }

    /// Replace the validity flag, leaving the payload untouched.
    pub fn set_valid(&mut self, flag: Option<bool>) {
        match self {
            Self::String { valid, .. }
            | Self::Number { valid, .. }
            | Self::Object { valid, .. }
            | Self::Document { valid, .. }
            | Self::Principal { valid, .. } => *valid = flag,
        }
    }

    /// Whether the payload is absent.
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            Self::String { value, .. } => value.is_none(),
            Self::Number { value, .. } => value.is_none(),
            Self::Object { value, .. } => value.is_none(),
            Self::Document { value, .. } => value.is_none(),
            Self::Principal { value, .. } => value.is_none(),
        }
    }
}

impl fmt::Display for ElementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        match self {
            Self::String { value: Some(v), .. } => write!(f, "{v:?}")?,
            Self::Number { value: Some(v), .. } => write!(f, "{v}")?,
            Self::Object { value: Some(v), .. } => write!(f, "{}", Value::Object(v.clone()))?,
            Self::Document { value: Some(v), .. } => {
                write!(f, "{}", v.name.as_deref().unwrap_or("unnamed"))?;
            }
            Self::Principal { value: Some(v), .. } => {
                write!(f, "{}", v.name.as_deref().unwrap_or("unnamed"))?;
            }
            _ => f.write_str("null")?,
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::PrincipalId;
    use crate::model::principal::PrincipalType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn string_wire_shape() {
        let value = ElementValue::string("abc").with_valid(Some(true));
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"type": "STRING", "value": "abc", "valid": true})
        );
    }

    #[test]
    fn unset_fields_are_omitted() {
        let value = ElementValue::Number {
            value: None,
            valid: None,
        };
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"type": "NUMBER"}));
    }

    #[test]
    fn deserializes_each_discriminator() {
        let values: Vec<ElementValue> = serde_json::from_value(json!([
            {"type": "STRING", "value": "a"},
            {"type": "NUMBER", "value": 1.5, "valid": false},
            {"type": "OBJECT", "value": {"k": 1}},
            {"type": "DOCUMENT", "value": {"name": "a.pdf"}},
            {"type": "PRINCIPAL", "value": {"type": "USER", "name": "ana"}},
        ]))
        .unwrap();

        let kinds: Vec<_> = values.iter().map(ElementValue::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementValueKind::String,
                ElementValueKind::Number,
                ElementValueKind::Object,
                ElementValueKind::Document,
                ElementValueKind::Principal,
            ]
        );
        assert_eq!(values[1].valid(), Some(false));
        assert_eq!(values[0].valid(), None);
    }

    #[test]
    fn round_trips_value_and_valid() {
        let principal = PrincipalItem::new(PrincipalId::new(), PrincipalType::User, "ana");
        let original = vec![
            ElementValue::principal(principal).with_valid(Some(false)),
            ElementValue::object(json!({"a": [1, 2]}).as_object().cloned().unwrap()),
        ];
        let text = serde_json::to_string(&original).unwrap();
        let back: Vec<ElementValue> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn set_valid_keeps_payload() {
        let mut value = ElementValue::number(2.0);
        value.set_valid(Some(false));
        assert_eq!(value, ElementValue::number(2.0).with_valid(Some(false)));
        value.set_valid(None);
        assert_eq!(value.valid(), None);
    }

    #[test]
    fn display_names_kind_and_payload() {
        assert_eq!(ElementValue::string("x").to_string(), "STRING(\"x\")");
        assert_eq!(ElementValue::number(3.5).to_string(), "NUMBER(3.5)");
        let empty = ElementValue::Document {
            value: None,
            valid: None,
        };
        assert!(empty.is_null());
        assert_eq!(empty.to_string(), "DOCUMENT(null)");
    }
}
