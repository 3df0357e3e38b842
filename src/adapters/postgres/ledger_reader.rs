//! PostgreSQL implementation of LedgerReader.
//!
//! Joins memberships and registrations with the catalog and user tables to
//! produce display-ready rows.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::club::ClubStatus;
use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, EventId, MembershipId, Money, RegistrationId, Timestamp,
};
use crate::domain::membership::{MembershipStatus, RegistrationStatus};
use crate::ports::{LedgerReader, MyClubRow, MyEventRow, RosterRow};

/// PostgreSQL implementation of LedgerReader.
#[derive(Clone)]
pub struct PostgresLedgerReader {
    pool: PgPool,
}

impl PostgresLedgerReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerReader for PostgresLedgerReader {
    async fn is_member(
        &self,
        user_email: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS (SELECT 1 FROM memberships \
             WHERE user_email = $1 AND club_id = $2 AND status = 'active') AS is_member",
        )
        .bind(user_email.as_str())
        .bind(club_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to check membership", e))?;

        Ok(row.get("is_member"))
    }

    async fn my_clubs(&self, user_email: &EmailAddress) -> Result<Vec<MyClubRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT m.id AS membership_id, m.status AS membership_status, m.joined_at,
                   c.id AS club_id, c.name AS club_name, c.category, c.location,
                   c.membership_fee_cents, c.status AS club_status
            FROM memberships m
            JOIN clubs c ON c.id = m.club_id
            WHERE m.user_email = $1
            ORDER BY m.joined_at DESC
            "#,
        )
        .bind(user_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list joined clubs", e))?;

        rows.iter()
            .map(|row| {
                let membership_status: String = row.get("membership_status");
                let club_status: String = row.get("club_status");
                Ok(MyClubRow {
                    membership_id: MembershipId::from_uuid(row.get("membership_id")),
                    club_id: ClubId::from_uuid(row.get("club_id")),
                    club_name: row.get("club_name"),
                    category: row.get("category"),
                    location: row.get("location"),
                    membership_fee: Money::from_cents(row.get("membership_fee_cents"))
                        .map_err(|e| DomainError::database("Corrupt fee in clubs row", e))?,
                    club_status: club_status
                        .parse::<ClubStatus>()
                        .map_err(|e| DomainError::database("Corrupt club status", e))?,
                    membership_status: membership_status
                        .parse::<MembershipStatus>()
                        .map_err(|e| DomainError::database("Corrupt membership status", e))?,
                    joined_at: Timestamp::from_datetime(row.get("joined_at")),
                })
            })
            .collect()
    }

    async fn my_events(&self, user_email: &EmailAddress) -> Result<Vec<MyEventRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id AS registration_id, r.status AS registration_status, r.registered_at,
                   e.id AS event_id, e.title, e.starts_at, e.location,
                   c.id AS club_id, c.name AS club_name
            FROM event_registrations r
            JOIN events e ON e.id = r.event_id
            JOIN clubs c ON c.id = e.club_id
            WHERE r.user_email = $1
            ORDER BY e.starts_at ASC
            "#,
        )
        .bind(user_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list registered events", e))?;

        rows.iter()
            .map(|row| {
                let registration_status: String = row.get("registration_status");
                let status = registration_status
                    .parse::<RegistrationStatus>()
                    .map_err(|e| DomainError::database("Corrupt registration status", e))?;
                Ok(MyEventRow {
                    registration_id: RegistrationId::from_uuid(row.get("registration_id")),
                    event_id: EventId::from_uuid(row.get("event_id")),
                    title: row.get("title"),
                    starts_at: Timestamp::from_datetime(row.get("starts_at")),
                    location: row.get("location"),
                    club_id: ClubId::from_uuid(row.get("club_id")),
                    club_name: row.get("club_name"),
                    registration_status: status,
                    registered_at: Timestamp::from_datetime(row.get("registered_at")),
                    is_registered: status == RegistrationStatus::Registered,
                })
            })
            .collect()
    }

    async fn club_roster(&self, club_id: &ClubId) -> Result<Vec<RosterRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT m.id AS membership_id, m.user_email, m.status AS membership_status,
                   m.joined_at, COALESCE(u.role, 'member') AS user_role
            FROM memberships m
            LEFT JOIN users u ON u.email = m.user_email
            WHERE m.club_id = $1
            ORDER BY m.joined_at DESC
            "#,
        )
        .bind(club_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load club roster", e))?;

        rows.iter()
            .map(|row| {
                let user_email: String = row.get("user_email");
                let membership_status: String = row.get("membership_status");
                Ok(RosterRow {
                    membership_id: MembershipId::from_uuid(row.get("membership_id")),
                    user_email: EmailAddress::parse(&user_email)
                        .map_err(|e| DomainError::database("Corrupt email in roster row", e))?,
                    user_role: row.get("user_role"),
                    membership_status: membership_status
                        .parse::<MembershipStatus>()
                        .map_err(|e| DomainError::database("Corrupt membership status", e))?,
                    joined_at: Timestamp::from_datetime(row.get("joined_at")),
                })
            })
            .collect()
    }
}
