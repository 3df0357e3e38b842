//! CreateEventHandler - manager schedules an event under a club they own.

use std::sync::Arc;

use crate::domain::event::{Event, NewEvent};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ClubRepository, EventRepository};

/// Command to create an event. `manager_email` on the input is the caller.
#[derive(Debug, Clone)]
pub struct CreateEventCommand {
    pub input: NewEvent,
}

/// Handler for event creation.
pub struct CreateEventHandler {
    clubs: Arc<dyn ClubRepository>,
    events: Arc<dyn EventRepository>,
}

impl CreateEventHandler {
    pub fn new(clubs: Arc<dyn ClubRepository>, events: Arc<dyn EventRepository>) -> Self {
        Self { clubs, events }
    }

    pub async fn handle(&self, cmd: CreateEventCommand) -> Result<Event, DomainError> {
        let club = self
            .clubs
            .find_by_id(&cmd.input.club_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClubNotFound, "Club not found"))?;

        if !club.is_owned_by(&cmd.input.manager_email) {
            return Err(DomainError::forbidden(
                "Only the owning manager may schedule events for this club",
            ));
        }

        let event = Event::create(cmd.input)?;
        self.events.insert(&event).await?;

        tracing::info!(event_id = %event.id, club_id = %event.club_id, "event created");
        Ok(event)
    }
}
