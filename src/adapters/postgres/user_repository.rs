//! PostgreSQL implementation of UserRepository.
//!
//! The unique email constraint resolves concurrent first-sign-in races:
//! `ON CONFLICT DO NOTHING` tells us whether this call created the row.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, EmailAddress, ErrorCode, Role, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::{UpsertOutcome, UserRepository};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let email: String = row.get("email");
    let role: String = row.get("role");
    Ok(User {
        id: UserId::from_uuid(row.get("id")),
        email: EmailAddress::parse(&email)
            .map_err(|e| DomainError::database("Corrupt email in users row", e))?,
        role: role
            .parse::<Role>()
            .map_err(|e| DomainError::database("Corrupt role in users row", e))?,
        created_at: Timestamp::from_datetime(row.get("created_at")),
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, role, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.role.as_str())
        .bind(user.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to upsert user", e))?;

        if result.rows_affected() == 0 {
            Ok(UpsertOutcome::Existing)
        } else {
            Ok(UpsertOutcome::Created)
        }
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, email, role, created_at FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to find user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn set_role(&self, email: &EmailAddress, role: Role) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE email = $1")
            .bind(email.as_str())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to set user role", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("User not found: {}", email),
            ));
        }
        Ok(())
    }
}
