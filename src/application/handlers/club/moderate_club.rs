//! ModerateClubHandler - admin approves or rejects a pending club.
//!
//! Independent of ownership: any admin may moderate any pending club.

use std::sync::Arc;

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{ClubId, DomainError, ErrorCode};
use crate::ports::ClubRepository;

/// Command to transition a pending club's status.
#[derive(Debug, Clone)]
pub struct ModerateClubCommand {
    pub club_id: ClubId,
    pub status: ClubStatus,
}

/// Handler for admin club moderation.
pub struct ModerateClubHandler {
    clubs: Arc<dyn ClubRepository>,
}

impl ModerateClubHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>) -> Self {
        Self { clubs }
    }

    pub async fn handle(&self, cmd: ModerateClubCommand) -> Result<Club, DomainError> {
        let mut club = self
            .clubs
            .find_by_id(&cmd.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        club.moderate(cmd.status)?;
        self.clubs.update(&club).await?;

        tracing::info!(club_id = %club.id, status = %club.status, "club moderated");
        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};

    #[tokio::test]
    async fn approves_pending_club() {
        let club = pending_club("m@x.com");
        let id = club.id;
        let repo = Arc::new(MockClubRepository::with_club(club));
        let handler = ModerateClubHandler::new(repo.clone());

        let moderated = handler
            .handle(ModerateClubCommand { club_id: id, status: ClubStatus::Approved })
            .await
            .unwrap();

        assert_eq!(moderated.status, ClubStatus::Approved);
        assert_eq!(repo.stored()[0].status, ClubStatus::Approved);
    }

    #[tokio::test]
    async fn rejects_second_transition() {
        let club = pending_club("m@x.com");
        let id = club.id;
        let handler = ModerateClubHandler::new(Arc::new(MockClubRepository::with_club(club)));

        handler
            .handle(ModerateClubCommand { club_id: id, status: ClubStatus::Rejected })
            .await
            .unwrap();

        let err = handler
            .handle(ModerateClubCommand { club_id: id, status: ClubStatus::Approved })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn missing_club_is_not_found() {
        let handler = ModerateClubHandler::new(Arc::new(MockClubRepository::new()));

        let err = handler
            .handle(ModerateClubCommand { club_id: ClubId::new(), status: ClubStatus::Approved })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ClubNotFound);
    }
}
