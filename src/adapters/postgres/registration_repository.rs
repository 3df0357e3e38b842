//! PostgreSQL implementation of RegistrationRepository.
//!
//! The partial unique index `event_registrations_user_event_key` guards
//! against duplicate live registrations; a constraint hit maps to
//! `AlreadyRegistered`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, EventId, RegistrationId, Timestamp,
};
use crate::domain::membership::{EventRegistration, RegistrationStatus};
use crate::ports::RegistrationRepository;

use super::membership_repository::map_unique_violation;

/// PostgreSQL implementation of RegistrationRepository.
#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(super) fn row_to_registration(
    row: &sqlx::postgres::PgRow,
) -> Result<EventRegistration, DomainError> {
    let user_email: String = row.get("user_email");
    let status: String = row.get("status");
    Ok(EventRegistration {
        id: RegistrationId::from_uuid(row.get("id")),
        user_email: EmailAddress::parse(&user_email)
            .map_err(|e| DomainError::database("Corrupt email in registrations row", e))?,
        event_id: EventId::from_uuid(row.get("event_id")),
        club_id: ClubId::from_uuid(row.get("club_id")),
        status: status
            .parse::<RegistrationStatus>()
            .map_err(|e| DomainError::database("Corrupt status in registrations row", e))?,
        registered_at: Timestamp::from_datetime(row.get("registered_at")),
        checkout_ref: row.get("checkout_ref"),
    })
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn insert(&self, registration: &EventRegistration) -> Result<(), DomainError> {
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
        .execute(&self.pool)
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

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &RegistrationId,
    ) -> Result<Option<EventRegistration>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_email, event_id, club_id, status, registered_at, checkout_ref \
             FROM event_registrations WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find registration", e))?;

        row.as_ref().map(row_to_registration).transpose()
    }

    async fn find_live(
        &self,
        user_email: &EmailAddress,
        event_id: &EventId,
    ) -> Result<Option<EventRegistration>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_email, event_id, club_id, status, registered_at, checkout_ref \
             FROM event_registrations \
             WHERE user_email = $1 AND event_id = $2 AND status <> 'cancelled'",
        )
        .bind(user_email.as_str())
        .bind(event_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find live registration", e))?;

        row.as_ref().map(row_to_registration).transpose()
    }

    async fn count_live(&self, event_id: &EventId) -> Result<i64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM event_registrations \
             WHERE event_id = $1 AND status <> 'cancelled'",
        )
        .bind(event_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to count registrations", e))?;

        Ok(row.get("count"))
    }

    async fn set_status(
        &self,
        id: &RegistrationId,
        status: RegistrationStatus,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE event_registrations SET status = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(
                    e,
                    "event_registrations_user_event_key",
                    ErrorCode::AlreadyRegistered,
                    "Already registered for this event",
                    "Failed to set registration status",
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Registration not found: {}", id),
            ));
        }
        Ok(())
    }
}
