//! Reporting read-model port.
//!
//! Dashboard aggregates computed from current store state on every request;
//! no caching, no precomputation.

use async_trait::async_trait;

use crate::domain::foundation::{ClubId, DomainError, EmailAddress, Money};

/// Platform-wide counts and sums for the admin dashboard.
#[derive(Debug, Clone, Default)]
pub struct PlatformStats {
    pub total_users: i64,
    pub pending_clubs: i64,
    pub approved_clubs: i64,
    pub rejected_clubs: i64,
    pub total_events: i64,
    pub active_memberships: i64,
    pub total_revenue: Money,
    /// Payment sums bucketed by calendar month, oldest first.
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// Clubs ranked by active member count, largest first.
    pub club_ranking: Vec<ClubMemberCount>,
}

/// Payment sum for one calendar month.
#[derive(Debug, Clone)]
pub struct MonthlyRevenue {
    /// First day of the month, ISO date (e.g. "2026-08-01").
    pub month: String,
    pub revenue: Money,
}

/// Active member count for one club.
#[derive(Debug, Clone)]
pub struct ClubMemberCount {
    pub club_id: ClubId,
    pub club_name: String,
    pub member_count: i64,
}

/// One owned club on the manager overview.
#[derive(Debug, Clone)]
pub struct ManagedClubRow {
    pub club_id: ClubId,
    pub club_name: String,
    pub status: String,
    pub member_count: i64,
    pub event_count: i64,
    pub revenue: Money,
}

/// A manager's dashboard: their clubs with counts and collected revenue.
#[derive(Debug, Clone, Default)]
pub struct ManagerOverview {
    pub clubs: Vec<ManagedClubRow>,
    pub total_members: i64,
    pub total_revenue: Money,
}

/// A member's own activity summary.
#[derive(Debug, Clone, Default)]
pub struct MemberStats {
    pub clubs_joined: i64,
    pub events_registered: i64,
    pub total_paid: Money,
}

/// Port for reporting queries.
#[async_trait]
pub trait ReportingReader: Send + Sync {
    /// Platform-wide aggregates for admins.
    async fn platform_stats(&self) -> Result<PlatformStats, DomainError>;

    /// Aggregates over the clubs a manager owns.
    async fn manager_overview(
        &self,
        manager_email: &EmailAddress,
    ) -> Result<ManagerOverview, DomainError>;

    /// A single member's activity summary.
    async fn member_stats(&self, user_email: &EmailAddress) -> Result<MemberStats, DomainError>;
}
