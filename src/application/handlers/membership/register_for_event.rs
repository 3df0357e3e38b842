//! RegisterForEventHandler - an active club member takes a place at an event.
//!
//! Registration requires an active membership in the event's parent club.
//! Capacity is enforced against live registrations when the event sets one.
//! Free events register immediately; paid events open a checkout session.

use std::sync::Arc;

use crate::domain::event::EventPricing;
use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId};
use crate::domain::membership::EventRegistration;
use crate::ports::{
    CheckoutKind, CheckoutMetadata, CheckoutProvider, CreateCheckoutSession, EventRepository,
    MembershipRepository, RegistrationRepository,
};

use crate::application::handlers::checkout::CheckoutSettings;

/// Command to register for an event.
#[derive(Debug, Clone)]
pub struct RegisterForEventCommand {
    pub event_id: EventId,
    pub caller: EmailAddress,
}

/// How a registration request resolved.
#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    /// Free event: registration holds now.
    Registered(EventRegistration),
    /// Paid event: the caller must complete checkout at this URL.
    CheckoutRequired { session_id: String, checkout_url: String },
}

/// Handler for event registrations.
pub struct RegisterForEventHandler {
    events: Arc<dyn EventRepository>,
    memberships: Arc<dyn MembershipRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    provider: Arc<dyn CheckoutProvider>,
    settings: CheckoutSettings,
}

impl RegisterForEventHandler {
    pub fn new(
        events: Arc<dyn EventRepository>,
        memberships: Arc<dyn MembershipRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        provider: Arc<dyn CheckoutProvider>,
        settings: CheckoutSettings,
    ) -> Self {
        Self { events, memberships, registrations, provider, settings }
    }

    pub async fn handle(
        &self,
        cmd: RegisterForEventCommand,
    ) -> Result<RegistrationOutcome, DomainError> {
        let event = self
            .events
            .find_by_id(&cmd.event_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::EventNotFound, "Event not found"))?;

        if self.memberships.find_active(&cmd.caller, &event.club_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::NotAMember,
                "Event registration requires an active membership in the hosting club",
            ));
        }

        if let Some(capacity) = event.capacity {
            let live = self.registrations.count_live(&cmd.event_id).await?;
            if live >= i64::from(capacity) {
                return Err(DomainError::new(ErrorCode::EventFull, "Event is at capacity"));
            }
        }

        let fee = match event.pricing {
            EventPricing::Free => {
                let registration =
                    EventRegistration::register_free(cmd.caller, cmd.event_id, event.club_id);
                self.registrations.insert(&registration).await?;
                tracing::info!(event_id = %cmd.event_id, "free event registration");
                return Ok(RegistrationOutcome::Registered(registration));
            }
            EventPricing::Paid { fee } => fee,
        };

        // Courtesy check before the provider round-trip; the commit-time
        // unique index remains the real guard.
        if self.registrations.find_live(&cmd.caller, &cmd.event_id).await?.is_some() {
            return Err(DomainError::new(
                ErrorCode::AlreadyRegistered,
                "Already registered for this event",
            ));
        }

        let session = self
            .provider
            .create_session(CreateCheckoutSession {
                amount: fee,
                currency: self.settings.currency.clone(),
                product_name: event.title.clone(),
                metadata: CheckoutMetadata {
                    user_email: cmd.caller,
                    kind: CheckoutKind::EventRegistration,
                    club_id: event.club_id,
                    event_id: Some(cmd.event_id),
                },
                success_url: self.settings.event_success_url(&cmd.event_id),
                cancel_url: self.settings.event_cancel_url(&cmd.event_id),
            })
            .await?;

        tracing::info!(event_id = %cmd.event_id, session_id = %session.id, "event checkout opened");
        Ok(RegistrationOutcome::CheckoutRequired {
            session_id: session.id,
            checkout_url: session.url,
        })
    }
}
