//! Event read queries.

use std::sync::Arc;

use crate::domain::event::Event;
use crate::domain::foundation::{ClubId, DomainError, ErrorCode, EventId};
use crate::ports::EventRepository;

/// Read-side queries over events.
pub struct EventQueries {
    events: Arc<dyn EventRepository>,
}

impl EventQueries {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn get(&self, id: &EventId) -> Result<Event, DomainError> {
        self.events
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))
    }

    pub async fn list(&self) -> Result<Vec<Event>, DomainError> {
        self.events.list().await
    }

    pub async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Event>, DomainError> {
        self.events.list_by_club(club_id).await
    }
}
