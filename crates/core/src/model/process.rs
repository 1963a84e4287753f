//! Processes and their page projections.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::element::ElementValueMap;
use super::host::impl_element_value_host;
use crate::id::ProcessId;

/// A running workflow instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Process identifier.
    pub id: ProcessId,
    /// Element values by definition code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValueMap>,
    /// Free-form entity data attached to the process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_data: Option<Map<String, Value>>,
}

impl Process {
    /// An empty process with the given id.
    #[must_use]
    pub fn new(id: ProcessId) -> Self {
        Self {
            id,
            element_values: None,
            entity_data: None,
        }
    }
}

impl_element_value_host!(Process, mut);

/// Read-only process projection returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPageItem {
    /// Process identifier.
    pub id: ProcessId,
    /// Element values by definition code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValueMap>,
}

impl_element_value_host!(ProcessPageItem);

impl From<&Process> for ProcessPageItem {
    fn from(process: &Process) -> Self {
        Self {
            id: process.id,
            element_values: process.element_values.clone(),
        }
    }
}
