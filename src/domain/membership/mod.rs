//! Membership and event registration records.
//!
//! A membership says a user has access to a club; a registration says a user
//! holds a place at an event. The at-most-one-active invariant for both is
//! enforced by partial unique indexes in the store, not by these types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    ClubId, EmailAddress, EventId, MembershipId, RegistrationId, Timestamp,
};

/// Status of a club membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Cancelled,
}

impl MembershipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MembershipStatus::Active),
            "cancelled" => Ok(MembershipStatus::Cancelled),
            other => Err(format!("unknown membership status: {}", other)),
        }
    }
}

/// Durable record that a user has access to a club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub id: MembershipId,
    pub user_email: EmailAddress,
    pub club_id: ClubId,
    pub status: MembershipStatus,
    pub joined_at: Timestamp,
    /// Checkout session id for paid joins; `None` for free joins.
    pub checkout_ref: Option<String>,
}

impl Membership {
    /// Creates an active membership for a free club join.
    pub fn activate_free(user_email: EmailAddress, club_id: ClubId) -> Self {
        Self {
            id: MembershipId::new(),
            user_email,
            club_id,
            status: MembershipStatus::Active,
            joined_at: Timestamp::now(),
            checkout_ref: None,
        }
    }

    /// Creates an active membership backed by a confirmed checkout session.
    pub fn activate_paid(
        user_email: EmailAddress,
        club_id: ClubId,
        checkout_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: MembershipId::new(),
            user_email,
            club_id,
            status: MembershipStatus::Active,
            joined_at: Timestamp::now(),
            checkout_ref: Some(checkout_ref.into()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }
}

/// Status of an event registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Cancelled,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registered" => Ok(RegistrationStatus::Registered),
            "cancelled" => Ok(RegistrationStatus::Cancelled),
            other => Err(format!("unknown registration status: {}", other)),
        }
    }
}

/// Durable record that a user holds a place at an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRegistration {
    pub id: RegistrationId,
    pub user_email: EmailAddress,
    pub event_id: EventId,
    pub club_id: ClubId,
    pub status: RegistrationStatus,
    pub registered_at: Timestamp,
    /// Checkout session id for paid registrations; `None` for free events.
    pub checkout_ref: Option<String>,
}

impl EventRegistration {
    /// Creates a registration for a free event.
    pub fn register_free(user_email: EmailAddress, event_id: EventId, club_id: ClubId) -> Self {
        Self {
            id: RegistrationId::new(),
            user_email,
            event_id,
            club_id,
            status: RegistrationStatus::Registered,
            registered_at: Timestamp::now(),
            checkout_ref: None,
        }
    }

    /// Creates a registration backed by a confirmed checkout session.
    pub fn register_paid(
        user_email: EmailAddress,
        event_id: EventId,
        club_id: ClubId,
        checkout_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: RegistrationId::new(),
            user_email,
            event_id,
            club_id,
            status: RegistrationStatus::Registered,
            registered_at: Timestamp::now(),
            checkout_ref: Some(checkout_ref.into()),
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == RegistrationStatus::Registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailAddress {
        EmailAddress::parse("a@b.com").unwrap()
    }

    #[test]
    fn free_membership_is_active_without_checkout_ref() {
        let membership = Membership::activate_free(email(), ClubId::new());
        assert!(membership.is_active());
        assert!(membership.checkout_ref.is_none());
    }

    #[test]
    fn paid_membership_carries_checkout_ref() {
        let membership = Membership::activate_paid(email(), ClubId::new(), "cs_123");
        assert!(membership.is_active());
        assert_eq!(membership.checkout_ref.as_deref(), Some("cs_123"));
    }

    #[test]
    fn free_registration_is_live() {
        let registration = EventRegistration::register_free(email(), EventId::new(), ClubId::new());
        assert!(registration.is_live());
        assert!(registration.checkout_ref.is_none());
    }

    #[test]
    fn paid_registration_carries_checkout_ref() {
        let registration =
            EventRegistration::register_paid(email(), EventId::new(), ClubId::new(), "cs_456");
        assert_eq!(registration.checkout_ref.as_deref(), Some("cs_456"));
    }

    #[test]
    fn statuses_roundtrip_through_strings() {
        for s in [MembershipStatus::Active, MembershipStatus::Cancelled] {
            assert_eq!(s.as_str().parse::<MembershipStatus>().unwrap(), s);
        }
        for s in [RegistrationStatus::Registered, RegistrationStatus::Cancelled] {
            assert_eq!(s.as_str().parse::<RegistrationStatus>().unwrap(), s);
        }
    }
}
