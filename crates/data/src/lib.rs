//! # Tasklane Data
//!
//! Dot-path navigation over the dynamic data trees attached to tasks,
//! processes and tenant users.
//!
//! ## Key Components
//!
//! - **Paths**: [`PropertyPath`] parses `users.0.name` into key and index segments
//! - **Navigator**: [`PathNavigator`] finds, updates and removes values, creating
//!   missing parents on write, with typed readers on top
//! - **Sources**: [`DataSource`] adapts each owner of a data tree
//! - **Lowering**: [`Storable`] turns dates, form files and principals into JSON
//!
//! ## Usage
//!
//! ```rust
//! use tasklane_core::{Task, TaskId};
//! use tasklane_data::prelude::*;
//!
//! let mut task = Task::new(TaskId::new());
//! let nav = PathNavigator::new();
//! nav.update(&mut task, "order.items.0.qty", 3).unwrap();
//!
//! assert_eq!(nav.get_integer(&task, "order.items.0.qty").unwrap(), 3);
//! assert_eq!(nav.find(&task, "order.missing").unwrap(), None);
//! ```

pub mod error;
pub mod form;
pub mod limits;
pub mod navigator;
pub mod path;
pub mod source;
pub mod storable;

pub use error::PropertyError;
pub use form::{FormFile, FormPrincipal, ParseFormValueError};
pub use limits::NavigatorLimits;
pub use navigator::{Container, ContainerMut, PathNavigator, PropertyHandle, PropertyRef};
pub use path::{PathSegment, PropertyPath};
pub use source::DataSource;
pub use storable::Storable;

pub mod prelude {
    pub use crate::error::PropertyError;
    pub use crate::form::{FormFile, FormPrincipal};
    pub use crate::limits::NavigatorLimits;
    pub use crate::navigator::PathNavigator;
    pub use crate::path::PropertyPath;
    pub use crate::source::DataSource;
    pub use crate::storable::Storable;
}
