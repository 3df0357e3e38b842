//! HTTP handlers for club catalog and moderation endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::club::{
    CreateClubCommand, DeleteClubCommand, ModerateClubCommand, UpdateClubCommand,
};
use crate::domain::foundation::{ClubId, DomainError};

use super::super::error::ApiError;
use super::super::middleware::CurrentUser;
use super::super::state::AppState;
use super::dto::{
    ClubDetailResponse, ClubResponse, CreateClubRequest, ListClubsQuery, ModerateClubRequest,
    RosterRowResponse, UpdateClubRequest,
};

fn parse_club_id(raw: &str) -> Result<ClubId, DomainError> {
    raw.parse::<ClubId>()
        .map_err(|_| DomainError::invalid_identifier(raw))
}

/// GET /clubs - public catalog listing with filter and sort.
pub async fn list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ListClubsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (filter, sort) = query.into_filter_and_sort()?;
    let clubs = state.club_queries().list(&filter, sort).await?;
    let body: Vec<ClubResponse> = clubs.into_iter().map(ClubResponse::from).collect();
    Ok(Json(body))
}

/// GET /clubs/:id - club detail with upcoming event count.
pub async fn get_club(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&raw_id)?;
    let detail = state.club_queries().get(&club_id).await?;
    Ok(Json(ClubDetailResponse::from(detail)))
}

/// POST /clubs - manager creates a club; status forced to pending.
pub async fn create_club(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<CreateClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = request.into_new_club(caller.email)?;
    let club = state
        .create_club_handler()
        .handle(CreateClubCommand { input })
        .await?;
    Ok((StatusCode::CREATED, Json(ClubResponse::from(club))))
}

/// PATCH /clubs/:id - owning manager edits club fields.
pub async fn update_club(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
    Json(request): Json<UpdateClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&raw_id)?;
    let club = state
        .update_club_handler()
        .handle(UpdateClubCommand {
            club_id,
            caller: caller.email,
            update: request.into_update()?,
        })
        .await?;
    Ok(Json(ClubResponse::from(club)))
}

/// DELETE /clubs/:id - owning manager or admin.
pub async fn delete_club(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&raw_id)?;
    state
        .delete_club_handler()
        .handle(DeleteClubCommand {
            club_id,
            caller: caller.email,
            caller_role: caller.role,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/clubs - full catalog for moderation, any status.
pub async fn admin_list_clubs(
    State(state): State<AppState>,
    Query(query): Query<ListClubsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (filter, sort) = query.into_filter_and_sort()?;
    let clubs = state.club_queries().list(&filter, sort).await?;
    let body: Vec<ClubResponse> = clubs.into_iter().map(ClubResponse::from).collect();
    Ok(Json(body))
}

/// PATCH /admin/clubs/:id - admin approves or rejects a pending club.
pub async fn moderate_club(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(request): Json<ModerateClubRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&raw_id)?;
    let club = state
        .moderate_club_handler()
        .handle(ModerateClubCommand { club_id, status: request.status })
        .await?;
    Ok(Json(ClubResponse::from(club)))
}

/// GET /clubs/:id/members - roster, owning manager or admin.
pub async fn club_roster(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = parse_club_id(&raw_id)?;
    let roster = state
        .membership_queries()
        .club_roster(&club_id, &caller.email, caller.role)
        .await?;
    let body: Vec<RosterRowResponse> = roster.into_iter().map(RosterRowResponse::from).collect();
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::mock_state;
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};
    use crate::domain::foundation::{EmailAddress, Role};
    use crate::domain::user::User;
    use std::sync::Arc;

    fn manager(email: &str) -> CurrentUser {
        CurrentUser(
            User::register(EmailAddress::parse(email).unwrap()).with_role(Role::Manager),
        )
    }

    #[tokio::test]
    async fn create_club_rejects_negative_fee() {
        let result = create_club(
            State(mock_state()),
            manager("m@x.com"),
            Json(CreateClubRequest {
                name: "Chess".to_string(),
                description: "d".to_string(),
                category: "games".to_string(),
                location: "campus".to_string(),
                banner_image: "x".to_string(),
                membership_fee: -5.0,
            }),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn get_club_rejects_malformed_id() {
        let result = get_club(State(mock_state()), Path("not-a-uuid".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_requires_ownership() {
        let club = pending_club("owner@x.com");
        let state = AppState {
            clubs: Arc::new(MockClubRepository::with_club(club.clone())),
            ..mock_state()
        };

        let result = delete_club(
            State(state),
            manager("stranger@x.com"),
            Path(club.id.to_string()),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_rejects_unknown_sort() {
        let result = list_clubs(
            State(mock_state()),
            Query(ListClubsQuery {
                sort: Some("alphabet".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_err());
    }
}
