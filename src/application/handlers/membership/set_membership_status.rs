//! SetMembershipStatusHandler - cancel or reactivate a membership.
//!
//! Allowed for the member themself, the owning manager of the club, and
//! admins. Reactivation can still fail with `AlreadyMember` if it would
//! collide with another active membership.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, MembershipId, Role};
use crate::domain::membership::MembershipStatus;
use crate::ports::{ClubRepository, MembershipRepository};

/// Command to set a membership's status.
#[derive(Debug, Clone)]
pub struct SetMembershipStatusCommand {
    pub membership_id: MembershipId,
    pub status: MembershipStatus,
    pub caller: EmailAddress,
    pub caller_role: Role,
}

/// Handler for membership status changes.
pub struct SetMembershipStatusHandler {
    memberships: Arc<dyn MembershipRepository>,
    clubs: Arc<dyn ClubRepository>,
}

impl SetMembershipStatusHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>, clubs: Arc<dyn ClubRepository>) -> Self {
        Self { memberships, clubs }
    }

    pub async fn handle(&self, cmd: SetMembershipStatusCommand) -> Result<(), DomainError> {
        let membership = self
            .memberships
            .find_by_id(&cmd.membership_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::MembershipNotFound, "Membership not found")
            })?;

        if !self.is_allowed(&cmd, &membership.user_email, &membership.club_id).await? {
            return Err(DomainError::forbidden(
                "Only the member, the owning manager, or an admin may change this membership",
            ));
        }

        self.memberships.set_status(&cmd.membership_id, cmd.status).await?;
        tracing::info!(
            membership_id = %cmd.membership_id,
            status = %cmd.status,
            "membership status changed"
        );
        Ok(())
    }

    async fn is_allowed(
        &self,
        cmd: &SetMembershipStatusCommand,
        member_email: &EmailAddress,
        club_id: &crate::domain::foundation::ClubId,
    ) -> Result<bool, DomainError> {
        if cmd.caller_role == Role::Admin || member_email == &cmd.caller {
            return Ok(true);
        }
        let club = self.clubs.find_by_id(club_id).await?;
        Ok(club.is_some_and(|c| c.is_owned_by(&cmd.caller)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};
    use crate::application::handlers::membership::test_support::MockMembershipRepository;
    use crate::domain::membership::Membership;

    async fn seeded(
        member: &str,
        manager: &str,
    ) -> (Arc<MockMembershipRepository>, Arc<MockClubRepository>, MembershipId) {
        let club = pending_club(manager);
        let club_id = club.id;
        let memberships = Arc::new(MockMembershipRepository::new());
        let membership =
            Membership::activate_free(EmailAddress::parse(member).unwrap(), club_id);
        let id = membership.id;
        memberships.insert(&membership).await.unwrap();
        (memberships, Arc::new(MockClubRepository::with_club(club)), id)
    }

    #[tokio::test]
    async fn member_cancels_their_own_membership() {
        let (memberships, clubs, id) = seeded("a@b.com", "m@x.com").await;
        let handler = SetMembershipStatusHandler::new(memberships.clone(), clubs);

        handler
            .handle(SetMembershipStatusCommand {
                membership_id: id,
                status: MembershipStatus::Cancelled,
                caller: EmailAddress::parse("a@b.com").unwrap(),
                caller_role: Role::Member,
            })
            .await
            .unwrap();

        assert_eq!(memberships.stored()[0].status, MembershipStatus::Cancelled);
    }

    #[tokio::test]
    async fn owning_manager_cancels_a_membership() {
        let (memberships, clubs, id) = seeded("a@b.com", "m@x.com").await;
        let handler = SetMembershipStatusHandler::new(memberships.clone(), clubs);

        handler
            .handle(SetMembershipStatusCommand {
                membership_id: id,
                status: MembershipStatus::Cancelled,
                caller: EmailAddress::parse("m@x.com").unwrap(),
                caller_role: Role::Manager,
            })
            .await
            .unwrap();

        assert_eq!(memberships.stored()[0].status, MembershipStatus::Cancelled);
    }

    #[tokio::test]
    async fn unrelated_member_is_forbidden() {
        let (memberships, clubs, id) = seeded("a@b.com", "m@x.com").await;
        let handler = SetMembershipStatusHandler::new(memberships.clone(), clubs);

        let err = handler
            .handle(SetMembershipStatusCommand {
                membership_id: id,
                status: MembershipStatus::Cancelled,
                caller: EmailAddress::parse("stranger@b.com").unwrap(),
                caller_role: Role::Member,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(memberships.stored()[0].status, MembershipStatus::Active);
    }

    #[tokio::test]
    async fn missing_membership_is_not_found() {
        let handler = SetMembershipStatusHandler::new(
            Arc::new(MockMembershipRepository::new()),
            Arc::new(MockClubRepository::new()),
        );

        let err = handler
            .handle(SetMembershipStatusCommand {
                membership_id: MembershipId::new(),
                status: MembershipStatus::Cancelled,
                caller: EmailAddress::parse("a@b.com").unwrap(),
                caller_role: Role::Admin,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MembershipNotFound);
    }
}
