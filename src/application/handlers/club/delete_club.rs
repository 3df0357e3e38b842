//! DeleteClubHandler - owning manager or admin removes a club.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, Role};
use crate::ports::ClubRepository;

/// Command to delete a club.
#[derive(Debug, Clone)]
pub struct DeleteClubCommand {
    pub club_id: ClubId,
    pub caller: EmailAddress,
    pub caller_role: Role,
}

/// Handler for club deletion.
pub struct DeleteClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl DeleteClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: DeleteClubCommand) -> Result<(), DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if cmd.caller_role != Role::Admin && !club.is_owned_by(&cmd.caller) {
            return Err(DomainError::forbidden("Only the owning manager or an admin may delete this club"));
        }

        self.clubs.delete(&cmd.club_id).await?;
        tracing::info!(club_id = %cmd.club_id, "club deleted");
        Ok(())
    }
}
