//! DeleteEventHandler - owning manager or admin removes an event.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId, Role};
use crate::ports::EventRepository;

/// Command to delete an event.
#[derive(Debug, Clone)]
pub struct DeleteEventCommand {
    pub event_id: EventId,
    pub caller: EmailAddress,
    pub caller_role: Role,
}

/// Handler for event deletion.
pub struct DeleteEventHandler {
    events: Arc<dyn EventRepository>,
}

impl DeleteEventHandler {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: DeleteEventCommand) -> Result<(), DomainError> {
        let event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        if cmd.caller_role != Role::Admin && !event.is_owned_by(&cmd.caller) {
            return Err(DomainError::forbidden(
                "Only the owning manager or an admin may delete this event",
            ));
        }

        self.events.delete(&cmd.event_id).await?;
        tracing::info!(event_id = %cmd.event_id, "event deleted");
        Ok(())
    }
}
