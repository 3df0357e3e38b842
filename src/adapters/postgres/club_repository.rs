//! PostgreSQL implementation of ClubRepository.

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder, Row};

use crate::domain::club::{Club, ClubStatus};
use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, Money, Timestamp,
};
use crate::ports::{ClubFilter, ClubRepository, ClubSort};

/// PostgreSQL implementation of ClubRepository.
#[derive(Clone)]
pub struct PostgresClubRepository {
    pool: PgPool,
}

impl PostgresClubRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_club(row: &sqlx::postgres::PgRow) -> Result<Club, DomainError> {
    let manager_email: String = row.get("manager_email");
    let status: String = row.get("status");
    Ok(Club {
        id: ClubId::from_uuid(row.get("id")),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        location: row.get("location"),
        banner_image: row.get("banner_image"),
        membership_fee: Money::from_cents(row.get("membership_fee_cents"))
            .map_err(|e| DomainError::database("Corrupt fee in clubs row", e))?,
        manager_email: EmailAddress::parse(&manager_email)
            .map_err(|e| DomainError::database("Corrupt manager email in clubs row", e))?,
        status: status
            .parse::<ClubStatus>()
            .map_err(|e| DomainError::database("Corrupt status in clubs row", e))?,
        created_at: Timestamp::from_datetime(row.get("created_at")),
        updated_at: Timestamp::from_datetime(row.get("updated_at")),
    })
}

const CLUB_COLUMNS: &str = "id, name, description, category, location, banner_image, \
     membership_fee_cents, manager_email, status, created_at, updated_at";

#[async_trait]
impl ClubRepository for PostgresClubRepository {
    async fn insert(&self, club: &Club) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO clubs (
                id, name, description, category, location, banner_image,
                membership_fee_cents, manager_email, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(&club.banner_image)
        .bind(club.membership_fee.as_cents())
        .bind(club.manager_email.as_str())
        .bind(club.status.as_str())
        .bind(club.created_at.as_datetime())
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert club", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM clubs WHERE id = $1", CLUB_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find club", e))?;

        row.as_ref().map(row_to_club).transpose()
    }

    async fn list(&self, filter: &ClubFilter, sort: ClubSort) -> Result<Vec<Club>, DomainError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {} FROM clubs WHERE TRUE", CLUB_COLUMNS));

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(manager) = &filter.manager_email {
            builder
                .push(" AND manager_email = ")
                .push_bind(manager.as_str().to_string());
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search);
            builder.push(" AND (name ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR category ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR location ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }

        match sort {
            ClubSort::Recency => builder.push(" ORDER BY created_at DESC"),
            ClubSort::Fee => builder.push(" ORDER BY membership_fee_cents ASC, created_at DESC"),
        };

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list clubs", e))?;

        rows.iter().map(row_to_club).collect()
    }

    async fn update(&self, club: &Club) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE clubs SET
                name = $2,
                description = $3,
                category = $4,
                location = $5,
                banner_image = $6,
                membership_fee_cents = $7,
                status = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(club.id.as_uuid())
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.category)
        .bind(&club.location)
        .bind(&club.banner_image)
        .bind(club.membership_fee.as_cents())
        .bind(club.status.as_str())
        .bind(club.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update club", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ClubNotFound,
                format!("Club not found: {}", club.id),
            ));
        }
        Ok(())
    }

    async fn delete(&self, id: &ClubId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete club", e))?;
        Ok(())
    }
}
