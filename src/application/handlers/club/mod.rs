//! Club command handlers and catalog queries.

mod create_club;
mod delete_club;
mod moderate_club;
mod queries;
mod update_club;

pub use create_club::{CreateClubCommand, CreateClubHandler};
pub use delete_club::{DeleteClubCommand, DeleteClubHandler};
pub use moderate_club::{ModerateClubCommand, ModerateClubHandler};
pub use queries::{ClubDetail, ClubQueries};
pub use update_club::{UpdateClubCommand, UpdateClubHandler};
