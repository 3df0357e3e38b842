//! PostgreSQL implementation of EventRepository.
//!
//! Pricing is stored as an `is_paid` flag plus a fee in cents; the check
//! constraint keeps the pair consistent, and `EventPricing::from_parts`
//! reassembles it on read.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::event::{Event, EventPricing};
use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, EventId, Money, Timestamp,
};
use crate::ports::EventRepository;

/// PostgreSQL implementation of EventRepository.
#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_event(row: &sqlx::postgres::PgRow) -> Result<Event, DomainError> {
    let manager_email: String = row.get("manager_email");
    let is_paid: bool = row.get("is_paid");
    let fee_cents: i64 = row.get("fee_cents");
    let fee = Money::from_cents(fee_cents)
        .map_err(|e| DomainError::database("Corrupt fee in events row", e))?;
    let capacity: Option<i32> = row.get("capacity");

    Ok(Event {
        id: EventId::from_uuid(row.get("id")),
        title: row.get("title"),
        description: row.get("description"),
        starts_at: Timestamp::from_datetime(row.get("starts_at")),
        location: row.get("location"),
        pricing: EventPricing::from_parts(is_paid, Some(fee))
            .map_err(|e| DomainError::database("Corrupt pricing in events row", e))?,
        capacity: capacity.map(|c| c as u32),
        club_id: ClubId::from_uuid(row.get("club_id")),
        manager_email: EmailAddress::parse(&manager_email)
            .map_err(|e| DomainError::database("Corrupt manager email in events row", e))?,
        created_at: Timestamp::from_datetime(row.get("created_at")),
        updated_at: Timestamp::from_datetime(row.get("updated_at")),
    })
}

const EVENT_COLUMNS: &str = "id, title, description, starts_at, location, is_paid, fee_cents, \
     capacity, club_id, manager_email, created_at, updated_at";

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, title, description, starts_at, location, is_paid, fee_cents,
                capacity, club_id, manager_email, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.starts_at.as_datetime())
        .bind(&event.location)
        .bind(event.pricing.is_paid())
        .bind(event.pricing.fee().as_cents())
        .bind(event.capacity.map(|c| c as i32))
        .bind(event.club_id.as_uuid())
        .bind(event.manager_email.as_str())
        .bind(event.created_at.as_datetime())
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert event", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find event", e))?;

        row.as_ref().map(row_to_event).transpose()
    }

    async fn list(&self) -> Result<Vec<Event>, DomainError> {
        let rows =
            sqlx::query(&format!("SELECT {} FROM events ORDER BY starts_at DESC", EVENT_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list events", e))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn list_by_club(&self, club_id: &ClubId) -> Result<Vec<Event>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM events WHERE club_id = $1 ORDER BY starts_at DESC",
            EVENT_COLUMNS
        ))
        .bind(club_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list club events", e))?;

        rows.iter().map(row_to_event).collect()
    }

    async fn count_upcoming(&self, club_id: &ClubId) -> Result<i64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM events WHERE club_id = $1 AND starts_at > now()",
        )
        .bind(club_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to count upcoming events", e))?;

        Ok(row.get("count"))
    }

    async fn update(&self, event: &Event) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE events SET
                title = $2,
                description = $3,
                starts_at = $4,
                location = $5,
                is_paid = $6,
                fee_cents = $7,
                capacity = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.starts_at.as_datetime())
        .bind(&event.location)
        .bind(event.pricing.is_paid())
        .bind(event.pricing.fee().as_cents())
        .bind(event.capacity.map(|c| c as i32))
        .bind(event.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update event", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::EventNotFound,
                format!("Event not found: {}", event.id),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &EventId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete event", e))?;
        Ok(())
    }
}
