//! Event command handlers and read queries.

mod create_event;
mod delete_event;
mod queries;
mod update_event;

pub use create_event::{CreateEventCommand, CreateEventHandler};
pub use delete_event::{DeleteEventCommand, DeleteEventHandler};
pub use queries::EventQueries;
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
