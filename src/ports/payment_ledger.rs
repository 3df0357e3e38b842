//! Payment ledger port: idempotent, atomic checkout commits.
//!
//! The confirm step writes a payment plus the membership or registration it
//! settles as one unit. The payment's unique transaction id is the
//! idempotency key: a second confirmation of the same session must commit
//! nothing and report `AlreadyConfirmed`.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::membership::{EventRegistration, Membership};
use crate::domain::payment::Payment;

/// Result of an idempotent commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Payment and its membership/registration were written.
    Committed,
    /// A payment with this transaction id already existed; nothing written.
    AlreadyConfirmed,
}

/// Port for recording confirmed payments.
#[async_trait]
pub trait PaymentLedger: Send + Sync {
    /// Looks up a payment by external transaction id.
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payment>, DomainError>;

    /// Atomically records a club membership payment and activates the
    /// membership. Idempotent on the payment's transaction id.
    async fn commit_club_membership(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<CommitOutcome, DomainError>;

    /// Atomically records an event payment and creates the registration.
    /// Idempotent on the payment's transaction id.
    async fn commit_event_registration(
        &self,
        payment: &Payment,
        registration: &EventRegistration,
    ) -> Result<CommitOutcome, DomainError>;
}
