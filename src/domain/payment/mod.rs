//! Payment records.
//!
//! A payment is written only after the checkout provider reports a session as
//! paid. The external transaction id is the idempotency key: its uniqueness
//! in the store is what prevents crediting the same checkout twice.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ClubId, EmailAddress, EventId, Money, PaymentId, Timestamp};

/// What a payment settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    ClubMembership,
    Event,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::ClubMembership => "club_membership",
            PaymentKind::Event => "event",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "club_membership" => Ok(PaymentKind::ClubMembership),
            "event" => Ok(PaymentKind::Event),
            other => Err(format!("unknown payment kind: {}", other)),
        }
    }
}

/// A successfully settled payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub user_email: EmailAddress,
    pub club_id: Option<ClubId>,
    pub event_id: Option<EventId>,
    /// External transaction id (the checkout session id). Unique.
    pub transaction_id: String,
    /// Provider-reported total.
    pub amount: Money,
    pub kind: PaymentKind,
    pub created_at: Timestamp,
}

impl Payment {
    /// Records a settled club membership payment.
    pub fn for_club_membership(
        user_email: EmailAddress,
        club_id: ClubId,
        transaction_id: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            user_email,
            club_id: Some(club_id),
            event_id: None,
            transaction_id: transaction_id.into(),
            amount,
            kind: PaymentKind::ClubMembership,
            created_at: Timestamp::now(),
        }
    }

    /// Records a settled event registration payment.
    pub fn for_event(
        user_email: EmailAddress,
        event_id: EventId,
        club_id: ClubId,
        transaction_id: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            user_email,
            club_id: Some(club_id),
            event_id: Some(event_id),
            transaction_id: transaction_id.into(),
            amount,
            kind: PaymentKind::Event,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailAddress {
        EmailAddress::parse("a@b.com").unwrap()
    }

    #[test]
    fn club_payment_has_club_target() {
        let payment = Payment::for_club_membership(
            email(),
            ClubId::new(),
            "cs_1",
            Money::from_cents(1500).unwrap(),
        );
        assert_eq!(payment.kind, PaymentKind::ClubMembership);
        assert!(payment.club_id.is_some());
        assert!(payment.event_id.is_none());
    }

    #[test]
    fn event_payment_references_both_event_and_club() {
        let payment = Payment::for_event(
            email(),
            EventId::new(),
            ClubId::new(),
            "cs_2",
            Money::from_cents(500).unwrap(),
        );
        assert_eq!(payment.kind, PaymentKind::Event);
        assert!(payment.event_id.is_some());
        assert!(payment.club_id.is_some());
    }

    #[test]
    fn kind_roundtrips_through_strings() {
        for kind in [PaymentKind::ClubMembership, PaymentKind::Event] {
            assert_eq!(kind.as_str().parse::<PaymentKind>().unwrap(), kind);
        }
    }
}
