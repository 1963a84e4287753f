//! Save-element command payloads.
//!
//! Each command already names the element definition code it targets, so
//! it carries a single value list instead of a code → values map.

use serde::{Deserialize, Serialize};

use super::element::ElementValue;

/// Command saving the values of one task element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSaveElementCommand {
    /// Definition code of the element being saved.
    pub element_definition_code: String,
    /// Values to save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<Vec<ElementValue>>,
}

impl TaskSaveElementCommand {
    /// An empty command for the given code.
    #[must_use]
    pub fn new(element_definition_code: impl Into<String>) -> Self {
        Self {
            element_definition_code: element_definition_code.into(),
            element_values: None,
        }
    }
}

/// Command saving the values of one process element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSaveElementCommand {
    /// Definition code of the element being saved.
    pub element_definition_code: String,
    /// Values to save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<Vec<ElementValue>>,
}

impl ProcessSaveElementCommand {
    /// An empty command for the given code.
    #[must_use]
    pub fn new(element_definition_code: impl Into<String>) -> Self {
        Self {
            element_definition_code: element_definition_code.into(),
            element_values: None,
        }
    }
}
