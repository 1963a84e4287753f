//! Tasks and their page projections.

use serde::{Deserialize, Serialize};

use super::element::ElementValueMap;
use super::forms::JsonFormsValue;
use super::host::impl_element_value_host;
use crate::id::{ProcessId, TaskId};

/// A unit of work inside a process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier.
    pub id: TaskId,
    /// Owning process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,
    /// Element values by definition code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValueMap>,
    /// Dynamic form payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_forms_value: Option<JsonFormsValue>,
}

impl Task {
    /// An empty task with the given id.
    #[must_use]
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            process_id: None,
            element_values: None,
            json_forms_value: None,
        }
    }

    /// Attach the task to a process.
    #[must_use]
    pub fn with_process(mut self, process_id: ProcessId) -> Self {
        self.process_id = Some(process_id);
        self
    }
}

impl_element_value_host!(Task, mut);

/// Read-only task projection returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPageItem {
    /// Task identifier.
    pub id: TaskId,
    /// Owning process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_id: Option<ProcessId>,
    /// Element values by definition code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_values: Option<ElementValueMap>,
}

impl_element_value_host!(TaskPageItem);

impl From<&Task> for TaskPageItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            process_id: task.process_id,
            element_values: task.element_values.clone(),
        }
    }
}
