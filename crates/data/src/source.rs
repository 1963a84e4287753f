//! Owners of a dynamic data tree.
//!
//! A [`DataSource`] hands the navigator the root map and accepts a new
//! root when a write needs one. Tasks keep their tree in the json-forms
//! value, processes in their entity data, tenant users in their metadata.

use serde_json::{Map, Value};
use tasklane_core::{JsonFormsValue, Process, Task, TaskSaveJsonFormsValueDataCommand, TenantUser};

/// Root-map access for the path navigator.
pub trait DataSource {
    /// The root map, `None` when no data has been stored yet.
    fn data(&self) -> Option<&Map<String, Value>>;

    /// Mutable root map, `None` when no data has been stored yet.
    fn data_mut(&mut self) -> Option<&mut Map<String, Value>>;

    /// Replace the root map.
    fn set_data(&mut self, data: Map<String, Value>);
}

impl DataSource for Map<String, Value> {
    fn data(&self) -> Option<&Map<String, Value>> {
        Some(self)
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        Some(self)
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        *self = data;
    }
}

impl DataSource for JsonFormsValue {
    fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.data.as_mut()
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        self.data = Some(data);
    }
}

impl DataSource for TaskSaveJsonFormsValueDataCommand {
    fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.data.as_mut()
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        self.data = Some(data);
    }
}

impl DataSource for Task {
    fn data(&self) -> Option<&Map<String, Value>> {
        self.json_forms_value.as_ref().and_then(DataSource::data)
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.json_forms_value.as_mut().and_then(DataSource::data_mut)
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        self.json_forms_value
            .get_or_insert_with(JsonFormsValue::default)
            .set_data(data);
    }
}

impl DataSource for TenantUser {
    fn data(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref().and_then(DataSource::data)
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.metadata.as_mut().and_then(DataSource::data_mut)
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        self.metadata
            .get_or_insert_with(JsonFormsValue::default)
            .set_data(data);
    }
}

impl DataSource for Process {
    fn data(&self) -> Option<&Map<String, Value>> {
        self.entity_data.as_ref()
    }

    fn data_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.entity_data.as_mut()
    }

    fn set_data(&mut self, data: Map<String, Value>) {
        self.entity_data = Some(data);
    }
}
