//! Accessor contract between the engine and host entities.
//!
//! The engine never touches a host directly. It reads and replaces one
//! ordered value list through an accessor that is bound to a definition
//! code when it is built. Hosts that keep a code → values map are adapted
//! with [`HostElementAccessor`] (read-write) or [`HostElementView`]
//! (read-only); save-element commands already name their code and
//! implement the traits directly.

use tasklane_core::{
    ElementValue, ElementValueHost, ElementValueHostMut, ElementValueMap,
    ProcessSaveElementCommand, TaskSaveElementCommand,
};

/// Read half of the accessor contract.
pub trait ElementValueSource {
    /// Definition code the accessor is bound to.
    fn code(&self) -> &str;

    /// Current values, `None` when the code has never been written.
    fn element_values(&self) -> Option<&[ElementValue]>;
}

/// Write half of the accessor contract.
pub trait ElementValueAccessor: ElementValueSource {
    /// Replace the whole list. An empty list removes the code.
    fn set_element_values(&mut self, values: Vec<ElementValue>);
}

/// Read-write accessor over any host with a mutable code → values map.
#[derive(Debug)]
pub struct HostElementAccessor<'a, H: ?Sized> {
    host: &'a mut H,
    code: String,
}

impl<'a, H: ElementValueHostMut + ?Sized> HostElementAccessor<'a, H> {
    /// Bind `host` to `code`.
    pub fn new(host: &'a mut H, code: impl Into<String>) -> Self {
        Self {
            host,
            code: code.into(),
        }
    }
}

impl<H: ElementValueHostMut + ?Sized> ElementValueSource for HostElementAccessor<'_, H> {
    fn code(&self) -> &str {
        &self.code
    }

    fn element_values(&self) -> Option<&[ElementValue]> {
        lookup(self.host.element_value_map(), &self.code)
    }
}

impl<H: ElementValueHostMut + ?Sized> ElementValueAccessor for HostElementAccessor<'_, H> {
    fn set_element_values(&mut self, values: Vec<ElementValue>) {
        let slot = self.host.element_value_map_mut();
        if values.is_empty() {
            if let Some(map) = slot {
                map.remove(&self.code);
            }
        } else {
            slot.get_or_insert_with(ElementValueMap::new)
                .insert(self.code.clone(), values);
        }
    }
}

/// Read-only accessor, usable with page items and other projections.
#[derive(Debug, Clone)]
pub struct HostElementView<'a, H: ?Sized> {
    host: &'a H,
    code: String,
}

impl<'a, H: ElementValueHost + ?Sized> HostElementView<'a, H> {
    /// Bind `host` to `code`.
    pub fn new(host: &'a H, code: impl Into<String>) -> Self {
        Self {
            host,
            code: code.into(),
        }
    }
}

impl<H: ElementValueHost + ?Sized> ElementValueSource for HostElementView<'_, H> {
    fn code(&self) -> &str {
        &self.code
    }

    fn element_values(&self) -> Option<&[ElementValue]> {
        lookup(self.host.element_value_map(), &self.code)
    }
}

fn lookup<'m>(map: Option<&'m ElementValueMap>, code: &str) -> Option<&'m [ElementValue]> {
    map.and_then(|map| map.get(code)).map(Vec::as_slice)
}

/// Shorthand for building accessors from a host.
pub trait ElementHostExt: ElementValueHost {
    /// Read-only accessor bound to `code`.
    fn element_view(&self, code: impl Into<String>) -> HostElementView<'_, Self> {
        HostElementView::new(self, code)
    }

    /// Read-write accessor bound to `code`.
    fn element_accessor(&mut self, code: impl Into<String>) -> HostElementAccessor<'_, Self>
    where
        Self: ElementValueHostMut,
    {
        HostElementAccessor::new(self, code)
    }
}

impl<H: ElementValueHost + ?Sized> ElementHostExt for H {}

macro_rules! impl_command_accessor {
    ($($ty:ty),+ $(,)?) => {$(
        impl ElementValueSource for $ty {
            fn code(&self) -> &str {
                &self.element_definition_code
            }

            fn element_values(&self) -> Option<&[ElementValue]> {
                self.element_values.as_deref()
            }
        }

        impl ElementValueAccessor for $ty {
            fn set_element_values(&mut self, values: Vec<ElementValue>) {
                self.element_values = if values.is_empty() { None } else { Some(values) };
            }
        }
    )+};
}

impl_command_accessor!(TaskSaveElementCommand, ProcessSaveElementCommand);

#[cfg(test)]
mod tests {
    use super::*;
    use tasklane_core::{Task, TaskId, TaskPageItem};

    #[test]
    fn first_write_creates_map_and_empty_write_removes_code() {
        let mut task = Task::new(TaskId::new());
        {
            let mut acc = task.element_accessor("EV_TEXT");
            assert!(acc.element_values().is_none());
            acc.set_element_values(vec![ElementValue::string("a")]);
        }
        assert!(task.element_values.as_ref().is_some_and(|m| m.contains_key("EV_TEXT")));

        task.element_accessor("EV_TEXT").set_element_values(Vec::new());
        assert!(task.element_values.as_ref().is_some_and(|m| !m.contains_key("EV_TEXT")));
    }

    #[test]
    fn view_reads_page_item() {
        let mut task = Task::new(TaskId::new());
        task.element_accessor("EV")
            .set_element_values(vec![ElementValue::number(1.0)]);
        let item = TaskPageItem::from(&task);

        let view = item.element_view("EV");
        assert_eq!(view.code(), "EV");
        assert_eq!(view.element_values(), Some(&[ElementValue::number(1.0)][..]));
        assert!(item.element_view("OTHER").element_values().is_none());
    }

    #[test]
    fn command_ignores_external_code() {
        let mut command = TaskSaveElementCommand::new("EV_CMD");
        assert_eq!(command.code(), "EV_CMD");
        command.set_element_values(vec![ElementValue::string("x")]);
        assert_eq!(command.element_values().map(<[_]>::len), Some(1));
        command.set_element_values(Vec::new());
        assert!(command.element_values.is_none());
    }
}
