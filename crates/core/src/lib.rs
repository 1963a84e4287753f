//! # Tasklane Core
//!
//! Model types shared by every Tasklane crate.
//!
//! ## Key Components
//!
//! - **Identifiers**: TaskId, ProcessId, PrincipalId, TenantId, TenantUserId, DocumentId
//! - **Element values**: the tagged [`ElementValue`] union and the code → values map
//! - **Hosts**: tasks, processes, their page items and save commands
//! - **Forms**: [`JsonFormsValue`] and tenant user metadata
//!
//! ## Usage
//!
//! ```rust
//! use tasklane_core::{ElementValue, ElementValueHost, Task, TaskId};
//!
//! let mut task = Task::new(TaskId::new());
//! task.element_values = Some([("EV_TEXT".to_owned(), vec![ElementValue::string("hi")])].into());
//!
//! assert!(task.element_value_map().is_some_and(|map| map.contains_key("EV_TEXT")));
//! ```

pub mod id;
pub mod model;

mod error;

pub use error::CoreError;
pub use id::*;
pub use model::*;

/// Result type used throughout Tasklane core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Common prelude for Tasklane crates.
pub mod prelude {
    pub use super::{
        CoreError, DocumentId, DocumentItem, ElementValue, ElementValueHost, ElementValueHostMut,
        ElementValueKind, ElementValueMap, JsonFormsValue, PrincipalId, PrincipalItem,
        PrincipalType, Process, ProcessId, Result, Task, TaskId, TenantUser, TenantUserId,
    };
}
