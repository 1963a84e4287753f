//! Host entities and the values they carry.

pub mod command;
pub mod document;
pub mod element;
pub mod forms;
pub mod host;
pub mod principal;
pub mod process;
pub mod task;
pub mod tenant;

pub use command::{ProcessSaveElementCommand, TaskSaveElementCommand};
pub use document::DocumentItem;
pub use element::{ElementValue, ElementValueKind, ElementValueMap};
pub use forms::{JsonFormsValue, TaskSaveJsonFormsValueDataCommand};
pub use host::{ElementValueHost, ElementValueHostMut};
pub use principal::{PrincipalItem, PrincipalType};
pub use process::{Process, ProcessPageItem};
pub use task::{Task, TaskPageItem};
pub use tenant::TenantUser;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{ProcessId, TaskId};
    use serde_json::json;

    #[test]
    fn task_round_trips_through_json() {
        let mut task = Task::new(TaskId::new()).with_process(ProcessId::new());
        task.element_values = Some(ElementValueMap::from([(
            "EV_TEXT".to_owned(),
            vec![ElementValue::string("hello")],
        )]));
        task.json_forms_value = Some(JsonFormsValue::with_data(
            json!({"user": {"name": "ana"}}).as_object().cloned().unwrap(),
        ));

        let text = serde_json::to_string(&task).unwrap();
        assert!(text.contains("\"elementValues\""));
        assert!(text.contains("\"jsonFormsValue\""));
        let back: Task = serde_json::from_str(&text).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn page_item_projects_element_values() {
        let mut process = Process::new(ProcessId::new());
        process.element_values = Some(ElementValueMap::from([(
            "EV_NUMBER".to_owned(),
            vec![ElementValue::number(1.0)],
        )]));
        let item = ProcessPageItem::from(&process);
        assert_eq!(item.element_value_map(), process.element_value_map());
    }

    #[test]
    fn host_mut_exposes_map_slot() {
        let mut task = Task::new(TaskId::nil());
        assert!(task.element_value_map().is_none());
        task.element_value_map_mut()
            .get_or_insert_with(ElementValueMap::new)
            .insert("EV".into(), vec![ElementValue::number(2.0)]);
        assert_eq!(task.element_value_map().map(ElementValueMap::len), Some(1));
    }

    #[test]
    fn save_element_command_wire_shape() {
        let mut command = TaskSaveElementCommand::new("EV_TEXT");
        command.element_values = Some(vec![ElementValue::string("x")]);
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "elementDefinitionCode": "EV_TEXT",
                "elementValues": [{"type": "STRING", "value": "x"}]
            })
        );
    }
}
