//! Dynamic form payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data captured by a dynamic (JSON forms) UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFormsValue {
    /// Whether the form data passed client-side validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Root of the data tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl JsonFormsValue {
    /// A value wrapping an existing data tree.
    #[must_use]
    pub fn with_data(data: Map<String, Value>) -> Self {
        Self {
            valid: None,
            data: Some(data),
        }
    }
}

/// Command replacing the form data of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSaveJsonFormsValueDataCommand {
    /// New data tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}
