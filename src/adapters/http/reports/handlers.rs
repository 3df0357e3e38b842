//! HTTP handlers for the reporting dashboards.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::super::error::ApiError;
use super::super::middleware::CurrentUser;
use super::super::state::AppState;
use super::dto::{ManagerOverviewResponse, MemberStatsResponse, PlatformStatsResponse};

/// GET /admin/stats - platform-wide counters, revenue series, club ranking.
pub async fn platform_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = state.reporting_queries().platform_stats().await?;
    Ok(Json(PlatformStatsResponse::from(stats)))
}

/// GET /manager/overview - the caller's clubs with member, event, and
/// revenue figures.
pub async fn manager_overview(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let overview = state.reporting_queries().manager_overview(&caller.email).await?;
    Ok(Json(ManagerOverviewResponse::from(overview)))
}

/// GET /member/stats - the caller's own participation summary.
pub async fn member_stats(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let stats = state.reporting_queries().member_stats(&caller.email).await?;
    Ok(Json(MemberStatsResponse::from(stats)))
}
