//! Membership and registration repository ports.
//!
//! Insert operations rely on the store's partial unique indexes for the
//! at-most-one-active invariants; a constraint hit surfaces as the matching
//! conflict `ErrorCode` (`AlreadyMember` / `AlreadyRegistered`), never as a
//! separate existence query racing the write.

use async_trait::async_trait;

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, EventId, MembershipId, RegistrationId,
};
use crate::domain::membership::{
    EventRegistration, Membership, MembershipStatus, RegistrationStatus,
};

/// Port for membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Inserts a membership. A duplicate active membership for the same
    /// (user, club) fails with `AlreadyMember`.
    async fn insert(&self, membership: &Membership) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError>;

    /// Finds the active membership of a user in a club, if any.
    async fn find_active(
        &self,
        user_email: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError>;

    /// Sets the status of an existing membership (moderation path).
    ///
    /// Fails with `MembershipNotFound` when no row was updated, and with
    /// `AlreadyMember` when reactivating would collide with another active
    /// membership.
    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<(), DomainError>;
}

/// Port for event registration persistence.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Inserts a registration. A duplicate non-cancelled registration for the
    /// same (user, event) fails with `AlreadyRegistered`.
    async fn insert(&self, registration: &EventRegistration) -> Result<(), DomainError>;

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<EventRegistration>, DomainError>;

    /// Finds the live registration of a user for an event, if any.
    async fn find_live(
        &self,
        user_email: &EmailAddress,
        event_id: &EventId,
    ) -> Result<Option<EventRegistration>, DomainError>;

    /// Counts live (non-cancelled) registrations for an event, for capacity
    /// enforcement.
    async fn count_live(&self, event_id: &EventId) -> Result<i64, DomainError>;

    /// Sets the status of an existing registration.
    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
    ) -> Result<(), DomainError>;
}
