//! JSON DTOs for reporting endpoints. Revenue figures cross the boundary in
//! major units.

use serde::Serialize;

use crate::ports::{
    ClubMemberCount, ManagedClubRow, ManagerOverview, MemberStats, MonthlyRevenue, PlatformStats,
};

/// Platform-wide counters and revenue for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStatsResponse {
    pub total_users: i64,
    pub pending_clubs: i64,
    pub approved_clubs: i64,
    pub rejected_clubs: i64,
    pub total_events: i64,
    pub active_memberships: i64,
    pub total_revenue: f64,
    pub monthly_revenue: Vec<MonthlyRevenueResponse>,
    pub club_ranking: Vec<ClubRankingRowResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenueResponse {
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubRankingRowResponse {
    pub club_id: String,
    pub club_name: String,
    pub member_count: i64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(row: MonthlyRevenue) -> Self {
        Self { month: row.month, revenue: row.revenue.as_major() }
    }
}

impl From<ClubMemberCount> for ClubRankingRowResponse {
    fn from(row: ClubMemberCount) -> Self {
        Self {
            club_id: row.club_id.to_string(),
            club_name: row.club_name,
            member_count: row.member_count,
        }
    }
}

impl From<PlatformStats> for PlatformStatsResponse {
    fn from(stats: PlatformStats) -> Self {
        Self {
            total_users: stats.total_users,
            pending_clubs: stats.pending_clubs,
            approved_clubs: stats.approved_clubs,
            rejected_clubs: stats.rejected_clubs,
            total_events: stats.total_events,
            active_memberships: stats.active_memberships,
            total_revenue: stats.total_revenue.as_major(),
            monthly_revenue: stats
                .monthly_revenue
                .into_iter()
                .map(MonthlyRevenueResponse::from)
                .collect(),
            club_ranking: stats
                .club_ranking
                .into_iter()
                .map(ClubRankingRowResponse::from)
                .collect(),
        }
    }
}

/// One managed club on the manager dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ManagedClubRowResponse {
    pub club_id: String,
    pub club_name: String,
    pub status: String,
    pub member_count: i64,
    pub event_count: i64,
    pub revenue: f64,
}

impl From<ManagedClubRow> for ManagedClubRowResponse {
    fn from(row: ManagedClubRow) -> Self {
        Self {
            club_id: row.club_id.to_string(),
            club_name: row.club_name,
            status: row.status,
            member_count: row.member_count,
            event_count: row.event_count,
            revenue: row.revenue.as_major(),
        }
    }
}

/// A manager's clubs with per-club and aggregate figures.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerOverviewResponse {
    pub clubs: Vec<ManagedClubRowResponse>,
    pub total_members: i64,
    pub total_revenue: f64,
}

impl From<ManagerOverview> for ManagerOverviewResponse {
    fn from(overview: ManagerOverview) -> Self {
        Self {
            clubs: overview
                .clubs
                .into_iter()
                .map(ManagedClubRowResponse::from)
                .collect(),
            total_members: overview.total_members,
            total_revenue: overview.total_revenue.as_major(),
        }
    }
}

/// A member's own participation summary.
#[derive(Debug, Clone, Serialize)]
pub struct MemberStatsResponse {
    pub clubs_joined: i64,
    pub events_registered: i64,
    pub total_paid: f64,
}

impl From<MemberStats> for MemberStatsResponse {
    fn from(stats: MemberStats) -> Self {
        Self {
            clubs_joined: stats.clubs_joined,
            events_registered: stats.events_registered,
            total_paid: stats.total_paid.as_major(),
        }
    }
}
