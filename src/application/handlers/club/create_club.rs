//! CreateClubHandler - manager creates a club, pending admin approval.

use std::sync::Arc;

use crate::domain::club::{Club, NewClub};
use crate::domain::foundation::DomainError;
use crate::ports::ClubRepository;

/// Command to create a club. Field validation happens in `Club::create`.
#[derive(Debug, Clone)]
pub struct CreateClubCommand {
    pub input: NewClub,
}

/// Handler for club creation.
pub struct CreateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl CreateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: CreateClubCommand) -> Result<Club, DomainError> {
        let club = Club::create(cmd.input)?;
        self.clubs.insert(&club).await?;

        tracing::info!(club_id = %club.id, manager = %club.manager_email, "club created");
        Ok(club)
    }
}
