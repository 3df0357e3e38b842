//! Checkout confirmation handlers and shared session settings.
//!
//! Paid joins and registrations open a provider session and redirect the
//! caller; nothing is written locally until the confirm handlers retrieve the
//! session back from the provider and commit it through the payment ledger.

mod confirm_club_checkout;
mod confirm_event_checkout;

pub use confirm_club_checkout::{
    ClubCheckoutConfirmation, ConfirmClubCheckoutCommand, ConfirmClubCheckoutHandler,
};
pub use confirm_event_checkout::{
    ConfirmEventCheckoutCommand, ConfirmEventCheckoutHandler, EventCheckoutConfirmation,
};

use crate::domain::foundation::{ClubId, EventId};

/// Currency and redirect origin shared by every session-opening handler.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    /// ISO currency code, e.g. "usd".
    pub currency: String,
    /// Origin of the frontend the provider redirects back to.
    pub frontend_origin: String,
}

impl CheckoutSettings {
    /// Redirect target after a paid club join. The provider substitutes the
    /// session id placeholder, which the frontend passes to the confirm
    /// endpoint.
    pub fn club_success_url(&self, club_id: &ClubId) -> String {
        format!(
            "{}/clubs/{}?session_id={{CHECKOUT_SESSION_ID}}",
            self.frontend_origin, club_id
        )
    }

    pub fn club_cancel_url(&self, club_id: &ClubId) -> String {
        format!("{}/clubs/{}", self.frontend_origin, club_id)
    }

    /// Redirect target after a paid event registration.
    pub fn event_success_url(&self, event_id: &EventId) -> String {
        format!(
            "{}/events/{}?session_id={{CHECKOUT_SESSION_ID}}",
            self.frontend_origin, event_id
        )
    }

    pub fn event_cancel_url(&self, event_id: &EventId) -> String {
        format!("{}/events/{}", self.frontend_origin, event_id)
    }
}
