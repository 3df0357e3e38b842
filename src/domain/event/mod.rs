//! Event aggregate.
//!
//! Events belong to exactly one club; the parent club and the owning manager
//! are fixed at creation. A paid event must carry a positive fee, a free event
//! carries none.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClubId, EmailAddress, EventId, Money, Timestamp, ValidationError,
};

/// Pricing of an event. The fee is only representable when the event is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EventPricing {
    Free,
    Paid { fee: Money },
}

impl EventPricing {
    /// Builds pricing from the wire representation (paid flag + optional fee).
    pub fn from_parts(is_paid: bool, fee: Option<Money>) -> Result<Self, ValidationError> {
        match (is_paid, fee) {
            (false, None) => Ok(EventPricing::Free),
            (false, Some(fee)) if fee.is_zero() => Ok(EventPricing::Free),
            (false, Some(_)) => Err(ValidationError::invalid_format(
                "fee",
                "free events cannot carry a fee",
            )),
            (true, Some(fee)) if !fee.is_zero() => Ok(EventPricing::Paid { fee }),
            (true, _) => Err(ValidationError::invalid_format(
                "fee",
                "paid events require a fee greater than zero",
            )),
        }
    }

    /// The fee to charge, zero for free events.
    pub fn fee(&self) -> Money {
        match self {
            EventPricing::Free => Money::ZERO,
            EventPricing::Paid { fee } => *fee,
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, EventPricing::Paid { .. })
    }
}

/// Validated input for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub starts_at: Timestamp,
    pub location: String,
    pub pricing: EventPricing,
    pub capacity: Option<u32>,
    pub club_id: ClubId,
    pub manager_email: EmailAddress,
}

/// Fields the owning manager may change after creation.
///
/// Parent club and owner are deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_at: Option<Timestamp>,
    pub location: Option<String>,
    pub pricing: Option<EventPricing>,
    pub capacity: Option<Option<u32>>,
}

/// A club event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub starts_at: Timestamp,
    pub location: String,
    pub pricing: EventPricing,
    pub capacity: Option<u32>,
    pub club_id: ClubId,
    pub manager_email: EmailAddress,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn require_nonempty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

fn require_capacity(capacity: Option<u32>) -> Result<(), ValidationError> {
    if capacity == Some(0) {
        return Err(ValidationError::invalid_format("capacity", "must be positive"));
    }
    Ok(())
}

impl Event {
    /// Creates an event under its parent club.
    pub fn create(input: NewEvent) -> Result<Self, ValidationError> {
        require_nonempty("title", &input.title)?;
        require_nonempty("description", &input.description)?;
        require_nonempty("location", &input.location)?;
        require_capacity(input.capacity)?;

        let now = Timestamp::now();
        Ok(Self {
            id: EventId::new(),
            title: input.title,
            description: input.description,
            starts_at: input.starts_at,
            location: input.location,
            pricing: input.pricing,
            capacity: input.capacity,
            club_id: input.club_id,
            manager_email: input.manager_email,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies an owner update. Parent club and owner cannot change here.
    pub fn apply_update(&mut self, update: EventUpdate) -> Result<(), ValidationError> {
        if let Some(title) = update.title {
            require_nonempty("title", &title)?;
            self.title = title;
        }
        if let Some(description) = update.description {
            require_nonempty("description", &description)?;
            self.description = description;
        }
        if let Some(starts_at) = update.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(location) = update.location {
            require_nonempty("location", &location)?;
            self.location = location;
        }
        if let Some(pricing) = update.pricing {
            self.pricing = pricing;
        }
        if let Some(capacity) = update.capacity {
            require_capacity(capacity)?;
            self.capacity = capacity;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Whether the caller owns this event.
    pub fn is_owned_by(&self, email: &EmailAddress) -> bool {
        &self.manager_email == email
    }

    /// Whether the event has not started yet.
    pub fn is_upcoming(&self) -> bool {
        self.starts_at.is_future()
    }
}
