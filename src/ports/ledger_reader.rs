//! Read-model port for membership and registration listings.
//!
//! These queries join the ledger with the catalog and user records to produce
//! display-ready rows; the write-side repositories stay narrow.

use async_trait::async_trait;

use crate::domain::club::ClubStatus;
use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, EventId, MembershipId, Money, RegistrationId, Timestamp,
};
use crate::domain::membership::{MembershipStatus, RegistrationStatus};

/// One club the requesting user belongs to.
#[derive(Debug, Clone)]
pub struct MyClubRow {
    pub membership_id: MembershipId,
    pub club_id: ClubId,
    pub club_name: String,
    pub category: String,
    pub location: String,
    pub membership_fee: Money,
    pub club_status: ClubStatus,
    pub membership_status: MembershipStatus,
    pub joined_at: Timestamp,
}

/// One event, annotated for the requesting user.
#[derive(Debug, Clone)]
pub struct MyEventRow {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    pub title: String,
    pub starts_at: Timestamp,
    pub location: String,
    pub club_id: ClubId,
    pub club_name: String,
    pub registration_status: RegistrationStatus,
    pub registered_at: Timestamp,
    /// Whether the requesting user holds a live registration.
    pub is_registered: bool,
}

/// One member on a club's roster.
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub membership_id: MembershipId,
    pub user_email: EmailAddress,
    pub user_role: String,
    pub membership_status: MembershipStatus,
    pub joined_at: Timestamp,
}

/// Port for ledger read queries.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Whether the user holds an active membership in the club.
    async fn is_member(
        &self,
        user_email: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<bool, DomainError>;

    /// Clubs the user holds a membership in, newest join first.
    async fn my_clubs(&self, user_email: &EmailAddress) -> Result<Vec<MyClubRow>, DomainError>;

    /// Events the user is registered for, soonest first.
    async fn my_events(&self, user_email: &EmailAddress) -> Result<Vec<MyEventRow>, DomainError>;

    /// Members of a club, newest join first.
    async fn club_roster(&self, club_id: &ClubId) -> Result<Vec<RosterRow>, DomainError>;
}
