//! UpdateClubHandler - owning manager edits club fields.
//!
//! Status and owner are immutable through this path; only the admin
//! moderation handler touches status.

use std::sync::Arc;

use crate::domain::club::{Club, ClubUpdate};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode};
use crate::ports::ClubRepository;

/// Command to update a club the caller owns.
#[derive(Debug, Clone)]
pub struct UpdateClubCommand {
    pub club_id: ClubId,
    pub caller: EmailAddress,
    pub update: ClubUpdate,
}

/// Handler for owner club updates.
pub struct UpdateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl UpdateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: UpdateClubCommand) -> Result<Club, DomainError> {
        let mut club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if !club.is_owned_by(&cmd.caller) {
            return Err(DomainError::forbidden("Only the owning manager may update this club"));
        }

        club.apply_update(cmd.update)?;
        self.clubs.update(&club).await?;
        Ok(club)
    }
}
