//! JSON DTOs for checkout confirmation endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::checkout::{ClubCheckoutConfirmation, EventCheckoutConfirmation};
use crate::ports::CommitOutcome;

/// Request carrying the provider session id returned after redirect.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmCheckoutRequest {
    pub session_id: String,
}

fn outcome_status(outcome: &CommitOutcome) -> &'static str {
    match outcome {
        CommitOutcome::Committed => "confirmed",
        CommitOutcome::AlreadyConfirmed => "already_confirmed",
    }
}

/// Result of confirming a club join checkout.
#[derive(Debug, Clone, Serialize)]
pub struct ClubConfirmationResponse {
    pub status: &'static str,
    pub club_id: String,
}

impl From<ClubCheckoutConfirmation> for ClubConfirmationResponse {
    fn from(confirmation: ClubCheckoutConfirmation) -> Self {
        Self {
            status: outcome_status(&confirmation.outcome),
            club_id: confirmation.club_id.to_string(),
        }
    }
}

/// Result of confirming an event registration checkout.
#[derive(Debug, Clone, Serialize)]
pub struct EventConfirmationResponse {
    pub status: &'static str,
    pub event_id: String,
}

impl From<EventCheckoutConfirmation> for EventConfirmationResponse {
    fn from(confirmation: EventCheckoutConfirmation) -> Self {
        Self {
            status: outcome_status(&confirmation.outcome),
            event_id: confirmation.event_id.to_string(),
        }
    }
}
