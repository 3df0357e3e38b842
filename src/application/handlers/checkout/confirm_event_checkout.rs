//! ConfirmEventCheckoutHandler - settles a paid event registration.
//!
//! Mirrors the club confirmation: provider session is the source of truth,
//! commit is idempotent on the session id, and the metadata must name an
//! event registration for this caller.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, EventId};
use crate::domain::membership::EventRegistration;
use crate::domain::payment::Payment;
use crate::ports::{CheckoutKind, CheckoutProvider, CommitOutcome, PaymentLedger};

/// Command to confirm an event registration checkout session.
#[derive(Debug, Clone)]
pub struct ConfirmEventCheckoutCommand {
    pub session_id: String,
    pub caller: EmailAddress,
}

/// Result of an event checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCheckoutConfirmation {
    pub outcome: CommitOutcome,
    pub event_id: EventId,
}

/// Handler for confirming paid event registrations.
pub struct ConfirmEventCheckoutHandler {
    provider: Arc<dyn CheckoutProvider>,
    ledger: Arc<dyn PaymentLedger>,
}

impl ConfirmEventCheckoutHandler {
    pub fn new(provider: Arc<dyn CheckoutProvider>, ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { provider, ledger }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmEventCheckoutCommand,
    ) -> Result<EventCheckoutConfirmation, DomainError> {
        let session = self.provider.retrieve_session(&cmd.session_id).await?;

        if !session.is_paid() {
            return Err(DomainError::new(
                ErrorCode::CheckoutNotPaid,
                "Checkout session has not been paid",
            )
            .with_detail("session_id", session.id));
        }

        let metadata = session.metadata.ok_or_else(|| {
            DomainError::new(ErrorCode::ValidationFailed, "Checkout session carries no metadata")
        })?;

        if metadata.kind != CheckoutKind::EventRegistration {
            return Err(DomainError::new(
                ErrorCode::CheckoutKindMismatch,
                "Checkout session does not pay for an event registration",
            ));
        }

        if metadata.user_email != cmd.caller {
            return Err(DomainError::forbidden(
                "Checkout session belongs to a different user",
            ));
        }

        let event_id = metadata.event_id.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Checkout session metadata names no event",
            )
        })?;

        let payment = Payment::for_event(
            metadata.user_email.clone(),
            event_id,
            metadata.club_id,
            session.id.clone(),
            session.amount_total,
        );
        let registration = EventRegistration::register_paid(
            metadata.user_email,
            event_id,
            metadata.club_id,
            session.id.clone(),
        );

        let outcome = self.ledger.commit_event_registration(&payment, &registration).await?;
        match outcome {
            CommitOutcome::Committed => {
                tracing::info!(
                    session_id = %session.id,
                    event_id = %event_id,
                    amount = payment.amount.as_cents(),
                    "event checkout confirmed"
                );
            }
            CommitOutcome::AlreadyConfirmed => {
                tracing::info!(session_id = %session.id, "event checkout replayed, nothing written");
            }
        }

        Ok(EventCheckoutConfirmation { outcome, event_id })
    }
}
