//! Ledger read queries: my clubs, my events, club rosters.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode, Role};
use crate::ports::{ClubRepository, LedgerReader, MyClubRow, MyEventRow, RosterRow};

/// Read-side queries over memberships and registrations.
pub struct MembershipQueries {
    ledger: Arc<dyn LedgerReader>,
    clubs: Arc<dyn ClubRepository>,
}

impl MembershipQueries {
    pub fn new(ledger: Arc<dyn LedgerReader>, clubs: Arc<dyn ClubRepository>) -> Self {
        Self { ledger, clubs }
    }

    /// Whether the caller holds an active membership in the club.
    pub async fn is_member(
        &self,
        caller: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<bool, DomainError> {
        self.ledger.is_member(caller, club_id).await
    }

    /// Clubs the caller belongs to.
    pub async fn my_clubs(&self, caller: &EmailAddress) -> Result<Vec<MyClubRow>, DomainError> {
        self.ledger.my_clubs(caller).await
    }

    /// Events the caller is registered for.
    pub async fn my_events(&self, caller: &EmailAddress) -> Result<Vec<MyEventRow>, DomainError> {
        self.ledger.my_events(caller).await
    }

    /// A club's member roster. Restricted to the owning manager and admins.
    pub async fn club_roster(
        &self,
        club_id: &ClubId,
        caller: &EmailAddress,
        caller_role: Role,
    ) -> Result<Vec<RosterRow>, DomainError> {
        let club = self
            .clubs
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if caller_role != Role::Admin && !club.is_owned_by(caller) {
            return Err(DomainError::forbidden(
                "Only the owning manager or an admin may view the roster",
            ));
        }

        self.ledger.club_roster(club_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};
    use crate::application::handlers::membership::test_support::MockLedgerReader;

    #[tokio::test]
    async fn roster_requires_ownership_or_admin() {
        let club = pending_club("m@x.com");
        let club_id = club.id;
        let queries = MembershipQueries::new(
            Arc::new(MockLedgerReader::new()),
            Arc::new(MockClubRepository::with_club(club)),
        );

        let owner = EmailAddress::parse("m@x.com").unwrap();
        assert!(queries.club_roster(&club_id, &owner, Role::Manager).await.is_ok());

        let admin = EmailAddress::parse("admin@x.com").unwrap();
        assert!(queries.club_roster(&club_id, &admin, Role::Admin).await.is_ok());

        let stranger = EmailAddress::parse("stranger@x.com").unwrap();
        let err = queries.club_roster(&club_id, &stranger, Role::Member).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn roster_of_missing_club_is_not_found() {
        let queries = MembershipQueries::new(
            Arc::new(MockLedgerReader::new()),
            Arc::new(MockClubRepository::new()),
        );

        let caller = EmailAddress::parse("admin@x.com").unwrap();
        let err = queries
            .club_roster(&ClubId::new(), &caller, Role::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ClubNotFound);
    }
}
