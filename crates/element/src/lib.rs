//! # Tasklane Element
//!
//! Typed access to the element values of tasks, processes and save
//! commands.
//!
//! One generic engine ([`engine`]) works against any host through the
//! small accessor contract in [`accessor`]:
//!
//! ```rust
//! use tasklane_core::{Task, TaskId};
//! use tasklane_element::prelude::*;
//!
//! let mut task = Task::new(TaskId::new());
//! let mut acc = task.element_accessor("EV_AMOUNT");
//! set_values(&mut acc, ["12.5", "7"]).unwrap();
//!
//! assert_eq!(get_value_as_double_list(&acc).unwrap(), vec![12.5, 7.0]);
//! assert_eq!(get_value_valid(&acc), Some(true));
//! ```

pub mod accessor;
pub mod engine;
pub mod error;
pub mod input;

pub use accessor::{
    ElementHostExt, ElementValueAccessor, ElementValueSource, HostElementAccessor, HostElementView,
};
pub use error::ElementError;
pub use input::ElementInput;

pub mod prelude {
    pub use crate::accessor::{
        ElementHostExt, ElementValueAccessor, ElementValueSource, HostElementAccessor,
        HostElementView,
    };
    pub use crate::engine::*;
    pub use crate::error::ElementError;
    pub use crate::input::ElementInput;
}
