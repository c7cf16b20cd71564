//! Core domain models and board logic for the task board.
pub mod drag;
pub mod form;
pub mod project;
pub mod store;
pub mod validation;
pub mod view;

pub use drag::{DataTransfer, DragState, Draggable, DropEffect, MemoryTransfer, MoveRequest};
pub use form::{FormRules, NewProject, ProjectDraft, ValidationError};
pub use project::{Project, ProjectId, ProjectStatus};
pub use store::ProjectStore;
pub use validation::{Validatable, validate};
pub use view::{ProjectItem, ProjectListView};
