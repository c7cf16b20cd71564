mod error_message;
mod header;
mod project_input;
mod project_item;
mod project_list;

pub use error_message::ErrorMessage;
pub use header::Header;
pub use project_input::ProjectInput;
pub use project_item::ProjectItemCard;
pub use project_list::ProjectList;
