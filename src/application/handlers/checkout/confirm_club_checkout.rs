//! ConfirmClubCheckoutHandler - settles a paid club join.
//!
//! The session retrieved from the provider is the sole source of truth: its
//! payment status gates the commit and its metadata names the user and club.
//! The commit is idempotent on the session id, so replaying a confirmation
//! reports `AlreadyConfirmed` and writes nothing.

use std::sync::Arc;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, ErrorCode};
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use crate::ports::{CheckoutKind, CheckoutProvider, CommitOutcome, PaymentLedger};

/// Command to confirm a club join checkout session.
#[derive(Debug, Clone)]
pub struct ConfirmClubCheckoutCommand {
    pub session_id: String,
    pub caller: EmailAddress,
}

/// Result of a club checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCheckoutConfirmation {
    pub outcome: CommitOutcome,
    pub club_id: ClubId,
}

/// Handler for confirming paid club joins.
pub struct ConfirmClubCheckoutHandler {
    provider: Arc<dyn CheckoutProvider>,
    ledger: Arc<dyn PaymentLedger>,
}

impl ConfirmClubCheckoutHandler {
    pub fn new(provider: Arc<dyn CheckoutProvider>, ledger: Arc<dyn PaymentLedger>) -> Self {
        Self { provider, ledger }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmClubCheckoutCommand,
    ) -> Result<ClubCheckoutConfirmation, DomainError> {
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

        if metadata.kind != CheckoutKind::ClubJoin {
            return Err(DomainError::new(
                ErrorCode::CheckoutKindMismatch,
                "Checkout session does not pay for a club membership",
            ));
        }

        if metadata.user_email != cmd.caller {
            return Err(DomainError::forbidden(
                "Checkout session belongs to a different user",
            ));
        }

        let payment = Payment::for_club_membership(
            metadata.user_email.clone(),
            metadata.club_id,
            session.id.clone(),
            session.amount_total,
        );
        let membership =
            Membership::activate_paid(metadata.user_email, metadata.club_id, session.id.clone());

        let outcome = self.ledger.commit_club_membership(&payment, &membership).await?;
        match outcome {
            CommitOutcome::Committed => {
                tracing::info!(
                    session_id = %session.id,
                    club_id = %metadata.club_id,
                    amount = payment.amount.as_cents(),
                    "club checkout confirmed"
                );
            }
            CommitOutcome::AlreadyConfirmed => {
                tracing::info!(session_id = %session.id, "club checkout replayed, nothing written");
            }
        }

        Ok(ClubCheckoutConfirmation { outcome, club_id: metadata.club_id })
    }
}
