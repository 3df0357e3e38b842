//! Checkout provider port for the external payment provider.
//!
//! The service never holds payment state of its own during a checkout: a
//! session is opened with the action's identity as opaque metadata, and a
//! later confirmation call retrieves the session from the provider as the
//! sole source of truth for what was paid and for how much.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClubId, EmailAddress, EventId, Money};

/// What a checkout session is paying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutKind {
    ClubJoin,
    EventRegistration,
}

impl CheckoutKind {
    /// Stable string form carried through provider metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutKind::ClubJoin => "club_join",
            CheckoutKind::EventRegistration => "event_registration",
        }
    }

    /// Parses the metadata string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "club_join" => Some(CheckoutKind::ClubJoin),
            "event_registration" => Some(CheckoutKind::EventRegistration),
            _ => None,
        }
    }
}

/// Action identity carried through the provider as opaque metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutMetadata {
    pub user_email: EmailAddress,
    pub kind: CheckoutKind,
    pub club_id: ClubId,
    /// Present only for event registrations.
    pub event_id: Option<EventId>,
}

/// Request to open a checkout session.
#[derive(Debug, Clone)]
pub struct CreateCheckoutSession {
    /// Amount in minor units; always positive (free actions never reach the
    /// provider).
    pub amount: Money,
    /// ISO currency code, e.g. "usd".
    pub currency: String,
    /// Line-item label shown on the hosted checkout page.
    pub product_name: String,
    pub metadata: CheckoutMetadata,
    pub success_url: String,
    pub cancel_url: String,
}

/// An opened checkout session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    /// Provider's session id; doubles as the payment transaction id.
    pub id: String,
    /// URL the caller is redirected to for payment.
    pub url: String,
}

/// Payment state the provider reports for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPaymentStatus {
    Paid,
    Unpaid,
}

/// A session retrieved from the provider during confirmation.
#[derive(Debug, Clone)]
pub struct RetrievedCheckout {
    pub id: String,
    pub payment_status: SessionPaymentStatus,
    /// Provider-reported total in minor units.
    pub amount_total: Money,
    /// The metadata attached at session creation, if it parsed back cleanly.
    pub metadata: Option<CheckoutMetadata>,
}

impl RetrievedCheckout {
    pub fn is_paid(&self) -> bool {
        self.payment_status == SessionPaymentStatus::Paid
    }
}

/// Errors from checkout provider operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckoutError {
    #[error("Checkout session not found: {0}")]
    SessionNotFound(String),

    #[error("Checkout provider rejected the request: {0}")]
    Rejected(String),

    #[error("Checkout provider unavailable: {0}")]
    Unavailable(String),
}

impl From<CheckoutError> for crate::domain::foundation::DomainError {
    fn from(err: CheckoutError) -> Self {
        use crate::domain::foundation::{DomainError, ErrorCode};

        match err {
            CheckoutError::SessionNotFound(id) => {
                DomainError::new(ErrorCode::ValidationFailed, "Unknown checkout session")
                    .with_detail("session_id", id)
            }
            CheckoutError::Rejected(msg) | CheckoutError::Unavailable(msg) => {
                DomainError::new(ErrorCode::ExternalServiceError, msg)
            }
        }
    }
}

/// Port for the external checkout provider.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Opens a checkout session; nothing is written locally.
    async fn create_session(
        &self,
        request: CreateCheckoutSession,
    ) -> Result<CheckoutSession, CheckoutError>;

    /// Retrieves a session by id during confirmation.
    async fn retrieve_session(&self, session_id: &str) -> Result<RetrievedCheckout, CheckoutError>;
}
