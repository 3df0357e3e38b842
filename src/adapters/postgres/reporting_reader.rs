//! PostgreSQL implementation of ReportingReader.
//!
//! Every dashboard request recomputes its aggregates from current store
//! state; there is no caching layer to invalidate.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, Money};
use crate::ports::{
    ClubMemberCount, ManagedClubRow, ManagerOverview, MemberStats, MonthlyRevenue, PlatformStats,
    ReportingReader,
};

/// PostgreSQL implementation of ReportingReader.
#[derive(Clone)]
pub struct PostgresReportingReader {
    pool: PgPool,
}

impl PostgresReportingReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn money_from_sum(cents: Option<i64>, context: &str) -> Result<Money, DomainError> {
    Money::from_cents(cents.unwrap_or(0))
        .map_err(|e| DomainError::database(context, e))
}

#[async_trait]
impl ReportingReader for PostgresReportingReader {
    async fn platform_stats(&self) -> Result<PlatformStats, DomainError> {
        let totals = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM clubs WHERE status = 'pending') AS pending_clubs,
                (SELECT COUNT(*) FROM clubs WHERE status = 'approved') AS approved_clubs,
                (SELECT COUNT(*) FROM clubs WHERE status = 'rejected') AS rejected_clubs,
                (SELECT COUNT(*) FROM events) AS total_events,
                (SELECT COUNT(*) FROM memberships WHERE status = 'active') AS active_memberships,
                (SELECT SUM(amount_cents) FROM payments) AS total_revenue_cents
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load platform totals", e))?;

        let monthly = sqlx::query(
            r#"
            SELECT to_char(date_trunc('month', created_at), 'YYYY-MM-DD') AS month,
                   SUM(amount_cents) AS revenue_cents
            FROM payments
            GROUP BY date_trunc('month', created_at)
            ORDER BY date_trunc('month', created_at) ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load monthly revenue", e))?;

        let ranking = sqlx::query(
            r#"
            SELECT c.id AS club_id, c.name AS club_name, COUNT(m.id) AS member_count
            FROM clubs c
            LEFT JOIN memberships m ON m.club_id = c.id AND m.status = 'active'
            GROUP BY c.id, c.name
            ORDER BY member_count DESC, c.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load club ranking", e))?;

        Ok(PlatformStats {
            total_users: totals.get("total_users"),
            pending_clubs: totals.get("pending_clubs"),
            approved_clubs: totals.get("approved_clubs"),
            rejected_clubs: totals.get("rejected_clubs"),
            total_events: totals.get("total_events"),
            active_memberships: totals.get("active_memberships"),
            total_revenue: money_from_sum(
                totals.get("total_revenue_cents"),
                "Corrupt revenue sum",
            )?,
            monthly_revenue: monthly
                .iter()
                .map(|row| {
                    Ok(MonthlyRevenue {
                        month: row.get("month"),
                        revenue: money_from_sum(
                            row.get("revenue_cents"),
                            "Corrupt monthly revenue sum",
                        )?,
                    })
                })
                .collect::<Result<_, DomainError>>()?,
            club_ranking: ranking
                .iter()
                .map(|row| ClubMemberCount {
                    club_id: ClubId::from_uuid(row.get("club_id")),
                    club_name: row.get("club_name"),
                    member_count: row.get("member_count"),
                })
                .collect(),
        })
    }

    async fn manager_overview(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<ManagerOverview, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id AS club_id, c.name AS club_name, c.status,
                   (SELECT COUNT(*) FROM memberships m
                    WHERE m.club_id = c.id AND m.status = 'active') AS member_count,
                   (SELECT COUNT(*) FROM events e WHERE e.club_id = c.id) AS event_count,
                   (SELECT SUM(p.amount_cents) FROM payments p
                    WHERE p.club_id = c.id) AS revenue_cents
            FROM clubs c
            WHERE c.manager_email = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(manager_email.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load manager overview", e))?;

        let mut overview = ManagerOverview::default();
        let mut revenue_cents: i64 = 0;
        for row in &rows {
            let revenue = money_from_sum(row.get("revenue_cents"), "Corrupt club revenue sum")?;
            let member_count: i64 = row.get("member_count");
            overview.total_members += member_count;
            revenue_cents += revenue.as_cents();
            overview.clubs.push(ManagedClubRow {
                club_id: ClubId::from_uuid(row.get("club_id")),
                club_name: row.get("club_name"),
                status: row.get("status"),
                member_count,
                event_count: row.get("event_count"),
                revenue,
            });
        }
        overview.total_revenue =
            money_from_sum(Some(revenue_cents), "Corrupt total revenue sum")?;
        Ok(overview)
    }

    async fn member_stats(&self, user_email: &EmailAddress) -> Result<MemberStats, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM memberships
                 WHERE user_email = $1 AND status = 'active') AS clubs_joined,
                (SELECT COUNT(*) FROM event_registrations
                 WHERE user_email = $1 AND status <> 'cancelled') AS events_registered,
                (SELECT SUM(amount_cents) FROM payments
                 WHERE user_email = $1) AS total_paid_cents
            "#,
        )
        .bind(user_email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load member stats", e))?;

        Ok(MemberStats {
            clubs_joined: row.get("clubs_joined"),
            events_registered: row.get("events_registered"),
            total_paid: money_from_sum(row.get("total_paid_cents"), "Corrupt payment sum")?,
        })
    }
}
