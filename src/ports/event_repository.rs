//! Event repository port.

use async_trait::async_trait;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, EventId};

/// Port for event persistence.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: &Event) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError>;

    /// Lists every event, newest start date first.
    async fn list(&self) -> Result<Vec<Event>, DomainError>;

    /// Lists the events of one club, newest start date first.
    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Event>, DomainError>;

    /// Counts a club's future-dated events (the computed field on club detail).
    async fn count_upcoming(&self, club_id: &ClubId) -> Result<i64, DomainError>;

    /// Persists the current state of an existing event.
    ///
    /// Fails with `EventNotFound` when no row was updated.
    async fn update(&self, event: &Event) -> Result<(), DomainError>;

    async fn delete(&self, id: &EventId) -> Result<(), DomainError>;
}
