//! PostgreSQL implementation of MembershipRepository.
//!
//! The partial unique index `memberships_user_club_active_key` is the
//! duplicate-join guard; a constraint hit on insert or reactivation maps to
//! `AlreadyMember` instead of a database error.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    ClubId, DomainError, EmailAddress, ErrorCode, MembershipId, Timestamp,
};
use crate::domain::membership::{Membership, MembershipStatus};
use crate::ports::MembershipRepository;

/// PostgreSQL implementation of MembershipRepository.
#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a unique violation on the named constraint to a domain conflict.
pub(super) fn map_unique_violation(
    err: sqlx::Error,
    constraint: &str,
    code: ErrorCode,
    message: &str,
    context: &str,
) -> DomainError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.constraint() == Some(constraint) {
            return DomainError::new(code, message);
        }
    }
    DomainError::database(context, err)
}

pub(super) fn row_to_membership(row: &sqlx::postgres::PgRow) -> Result<Membership, DomainError> {
    let user_email: String = row.get("user_email");
    let status: String = row.get("status");
    Ok(Membership {
        id: MembershipId::from_uuid(row.get("id")),
        user_email: EmailAddress::parse(&user_email)
            .map_err(|e| DomainError::database("Corrupt email in memberships row", e))?,
        club_id: ClubId::from_uuid(row.get("club_id")),
        status: status
            .parse::<MembershipStatus>()
            .map_err(|e| DomainError::database("Corrupt status in memberships row", e))?,
        joined_at: Timestamp::from_datetime(row.get("joined_at")),
        checkout_ref: row.get("checkout_ref"),
    })
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn insert(&self, membership: &Membership) -> Result<(), DomainError> {
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
        .execute(&self.pool)
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

        Ok(())
    }

    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_email, club_id, status, joined_at, checkout_ref \
             FROM memberships WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find membership", e))?;

        row.as_ref().map(row_to_membership).transpose()
    }

    async fn find_active(
        &self,
        user_email: &EmailAddress,
        club_id: &ClubId,
    ) -> Result<Option<Membership>, DomainError> {
        let row = sqlx::query(
            "SELECT id, user_email, club_id, status, joined_at, checkout_ref \
             FROM memberships WHERE user_email = $1 AND club_id = $2 AND status = 'active'",
        )
        .bind(user_email.as_str())
        .bind(club_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find active membership", e))?;

        row.as_ref().map(row_to_membership).transpose()
    }

    async fn set_status(
        &self,
        id: &MembershipId,
        status: MembershipStatus,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE memberships SET status = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(
                    e,
                    "memberships_user_club_active_key",
                    ErrorCode::AlreadyMember,
                    "Already an active member of this club",
                    "Failed to set membership status",
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::MembershipNotFound,
                format!("Membership not found: {}", id),
            ));
        }
        Ok(())
    }
}
