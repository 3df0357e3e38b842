//! PostgreSQL implementation of PaymentLedger.
//!
//! Each commit runs in one transaction: the payment insert uses
//! `ON CONFLICT (transaction_id) DO NOTHING`, and zero affected rows means
//! the session was already settled, so the transaction writes nothing else
//! and the caller sees `AlreadyConfirmed`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, EventId, Money, PaymentId, Timestamp,
};
use crate::domain::membership::{EventRegistration, Membership};
use crate::domain::payment::{Payment, PaymentKind};
use crate::ports::{CommitOutcome, PaymentLedger};

use super::membership_repository::map_unique_violation;

/// PostgreSQL implementation of PaymentLedger.
#[derive(Clone)]
pub struct PostgresPaymentLedger {
    pool: PgPool,
}

impl PostgresPaymentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts the payment inside the transaction. Returns false when a
    /// payment with this transaction id already exists.
    async fn insert_payment(
        tx: &mut Transaction<'_, Postgres>,
        payment: &Payment,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO payments (
                id, user_email, club_id, event_id, transaction_id, amount_cents, kind, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (transaction_id) DO NOTHING
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.user_email.as_str())
        .bind(payment.club_id.map(|id| *id.as_uuid()))
        .bind(payment.event_id.map(|id| *id.as_uuid()))
        .bind(&payment.transaction_id)
        .bind(payment.amount.as_cents())
        .bind(payment.kind.as_str())
        .bind(payment.created_at.as_datetime())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert payment", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_payment(row: &sqlx::postgres::PgRow) -> Result<Payment, DomainError> {
    let user_email: String = row.get("user_email");
    let kind: String = row.get("kind");
    Ok(Payment {
        id: PaymentId::from_uuid(row.get("id")),
        user_email: EmailAddress::parse(&user_email)
            .map_err(|e| DomainError::database("Corrupt email in payments row", e))?,
        club_id: row.get::<Option<uuid::Uuid>, _>("club_id").map(ClubId::from_uuid),
        event_id: row.get::<Option<uuid::Uuid>, _>("event_id").map(EventId::from_uuid),
        transaction_id: row.get("transaction_id"),
        amount: Money::from_cents(row.get("amount_cents"))
            .map_err(|e| DomainError::database("Corrupt amount in payments row", e))?,
        kind: kind
            .parse::<PaymentKind>()
            .map_err(|e| DomainError::database("Corrupt kind in payments row", e))?,
        created_at: Timestamp::from_datetime(row.get("created_at")),
    })
}

#[async_trait]
impl PaymentLedger for PostgresPaymentLedger {
    async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payment>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_email, club_id, event_id, transaction_id, amount_cents, kind, \
             created_at FROM payments WHERE transaction_id = $1",
        )
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find payment", e))?;

        row.as_ref().map(row_to_payment).transpose()
    }

    async fn commit_club_membership(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<CommitOutcome, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if !Self::insert_payment(&mut tx, payment).await? {
            tx.rollback()
                .await
                .map_err(|e| DomainError::database("Failed to roll back transaction", e))?;
            return Ok(CommitOutcome::AlreadyConfirmed);
        }

        sqlx::query(
            r#"
            INSERT INTO memberships (id, user_email, club_id, status, joined_at, checkout_ref)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(membership.id.as_uuid())
        .bind(membership.user_email.as_str())
        .bind(membership.club_id.as_uuid())
        .bind(membership.status.as_str())
        .bind(membership.joined_at.as_datetime())
        .bind(&membership.checkout_ref)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "memberships_user_club_active_key",
                ErrorCode::AlreadyMember,
                "Already an active member of this club",
                "Failed to insert membership",
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;
        Ok(CommitOutcome::Committed)
    }

    async fn commit_event_registration(
        &self,
        payment: &Payment,
        registration: &EventRegistration,
    ) -> Result<CommitOutcome, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if !Self::insert_payment(&mut tx, payment).await? {
            tx.rollback()
                .await
                .map_err(|e| DomainError::database("Failed to roll back transaction", e))?;
            return Ok(CommitOutcome::AlreadyConfirmed);
        }

        sqlx::query(
            r#"
            INSERT INTO event_registrations (
                id, user_email, event_id, club_id, status, registered_at, checkout_ref
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(registration.id.as_uuid())
        .bind(registration.user_email.as_str())
        .bind(registration.event_id.as_uuid())
        .bind(registration.club_id.as_uuid())
        .bind(registration.status.as_str())
        .bind(registration.registered_at.as_datetime())
        .bind(&registration.checkout_ref)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "event_registrations_user_event_key",
                ErrorCode::AlreadyRegistered,
                "Already registered for this event",
                "Failed to insert registration",
            )
        })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;
        Ok(CommitOutcome::Committed)
    }
}
