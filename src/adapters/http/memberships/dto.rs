//! JSON DTOs for membership and registration endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::membership::{EventRegistration, Membership, MembershipStatus};
use crate::ports::{MyClubRow, MyEventRow};

/// A membership row as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub id: String,
    pub user_email: String,
    pub club_id: String,
    pub status: String,
    pub joined_at: String,
    pub checkout_ref: Option<String>,
}

impl From<Membership> for MembershipResponse {
    fn from(membership: Membership) -> Self {
        Self {
            id: membership.id.to_string(),
            user_email: membership.user_email.to_string(),
            club_id: membership.club_id.to_string(),
            status: membership.status.as_str().to_string(),
            joined_at: membership.joined_at.to_rfc3339(),
            checkout_ref: membership.checkout_ref,
        }
    }
}

/// A registration row as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub user_email: String,
    pub event_id: String,
    pub club_id: String,
    pub status: String,
    pub registered_at: String,
    pub checkout_ref: Option<String>,
}

impl From<EventRegistration> for RegistrationResponse {
    fn from(registration: EventRegistration) -> Self {
        Self {
            id: registration.id.to_string(),
            user_email: registration.user_email.to_string(),
            event_id: registration.event_id.to_string(),
            club_id: registration.club_id.to_string(),
            status: registration.status.as_str().to_string(),
            registered_at: registration.registered_at.to_rfc3339(),
            checkout_ref: registration.checkout_ref,
        }
    }
}

/// Redirect payload when a paid action needs provider checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequiredResponse {
    pub session_id: String,
    pub checkout_url: String,
}

/// Request to transition a membership's status.
#[derive(Debug, Clone, Deserialize)]
pub struct SetMembershipStatusRequest {
    pub status: MembershipStatus,
}

/// One club on the caller's "my clubs" view.
#[derive(Debug, Clone, Serialize)]
pub struct MyClubRowResponse {
    pub membership_id: String,
    pub club_id: String,
    pub club_name: String,
    pub category: String,
    pub location: String,
    pub membership_fee: f64,
    pub club_status: String,
    pub membership_status: String,
    pub joined_at: String,
}

impl From<MyClubRow> for MyClubRowResponse {
    fn from(row: MyClubRow) -> Self {
        Self {
            membership_id: row.membership_id.to_string(),
            club_id: row.club_id.to_string(),
            club_name: row.club_name,
            category: row.category,
            location: row.location,
            membership_fee: row.membership_fee.as_major(),
            club_status: row.club_status.as_str().to_string(),
            membership_status: row.membership_status.as_str().to_string(),
            joined_at: row.joined_at.to_rfc3339(),
        }
    }
}

/// One event on the caller's "my events" view.
#[derive(Debug, Clone, Serialize)]
pub struct MyEventRowResponse {
    pub registration_id: String,
    pub event_id: String,
    pub title: String,
    pub starts_at: String,
    pub location: String,
    pub club_id: String,
    pub club_name: String,
    pub registration_status: String,
    pub registered_at: String,
    pub is_registered: bool,
}

impl From<MyEventRow> for MyEventRowResponse {
    fn from(row: MyEventRow) -> Self {
        Self {
            registration_id: row.registration_id.to_string(),
            event_id: row.event_id.to_string(),
            title: row.title,
            starts_at: row.starts_at.to_rfc3339(),
            location: row.location,
            club_id: row.club_id.to_string(),
            club_name: row.club_name,
            registration_status: row.registration_status.as_str().to_string(),
            registered_at: row.registered_at.to_rfc3339(),
            is_registered: row.is_registered,
        }
    }
}
