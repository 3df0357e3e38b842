//! UpdateEventHandler - owning manager edits event fields.

use std::sync::Arc;

use crate::domain::event::{Event, EventUpdate};
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId};
use crate::ports::EventRepository;

/// Command to update an event the caller owns.
#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: EventId,
    pub caller: EmailAddress,
    pub update: EventUpdate,
}

/// Handler for owner event updates.
pub struct UpdateEventHandler {
    events: Arc<dyn EventRepository>,
}

impl UpdateEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> Result<Event, DomainError> {
        let mut event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        if !event.is_owned_by(&cmd.caller) {
            return Err(DomainError::forbidden("Only the owning manager may update this event"));
        }

        event.apply_update(cmd.update)?;
        self.events.update(&event).await?;
        Ok(event)
    }
}
