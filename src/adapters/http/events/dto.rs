//! JSON DTOs for event endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, EventPricing, EventUpdate, NewEvent};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, Money, Timestamp};

/// Request to schedule an event. The owner is the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub is_paid: bool,
    pub fee: Option<f64>,
    pub capacity: Option<u32>,
    pub club_id: String,
}

impl CreateEventRequest {
    pub fn into_new_event(self, manager_email: EmailAddress) -> Result<NewEvent, DomainError> {
        let club_id = self
            .club_id
            .parse::<ClubId>()
            .map_err(|_| DomainError::invalid_identifier(&self.club_id))?;
        let fee = self.fee.map(Money::from_major).transpose()?;
        let pricing = EventPricing::from_parts(self.is_paid, fee)?;

        Ok(NewEvent {
            title: self.title,
            description: self.description,
            starts_at: Timestamp::from_datetime(self.starts_at),
            location: self.location,
            pricing,
            capacity: self.capacity,
            club_id,
            manager_email,
        })
    }
}

/// Request to update event fields. Absent fields stay unchanged; pricing
/// changes require the paid flag so free and paid states stay consistent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub is_paid: Option<bool>,
    pub fee: Option<f64>,
    pub capacity: Option<u32>,
}

impl UpdateEventRequest {
    pub fn into_update(self) -> Result<EventUpdate, DomainError> {
        let pricing = match self.is_paid {
            Some(is_paid) => {
                let fee = self.fee.map(Money::from_major).transpose()?;
                Some(EventPricing::from_parts(is_paid, fee)?)
            }
            None if self.fee.is_some() => {
                return Err(DomainError::validation(
                    "fee",
                    "fee changes must carry the is_paid flag",
                ))
            }
            None => None,
        };

        Ok(EventUpdate {
            title: self.title,
            description: self.description,
            starts_at: self.starts_at.map(Timestamp::from_datetime),
            location: self.location,
            pricing,
            capacity: self.capacity.map(Some),
        })
    }
}

/// An event as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starts_at: String,
    pub location: String,
    pub is_paid: bool,
    pub fee: f64,
    pub capacity: Option<u32>,
    pub club_id: String,
    pub manager_email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            starts_at: event.starts_at.to_rfc3339(),
            location: event.location,
            is_paid: event.pricing.is_paid(),
            fee: event.pricing.fee().as_major(),
            capacity: event.capacity,
            club_id: event.club_id.to_string(),
            manager_email: event.manager_email.to_string(),
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }
}
