//! HTTP handlers for joining, registering, and membership views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::application::handlers::membership::{
    JoinClubCommand, JoinOutcome, RegisterForEventCommand, RegistrationOutcome,
    SetMembershipStatusCommand,
};
use crate::domain::foundation::{ClubId, DomainError, EmailAddress, EventId, MembershipId};

use super::super::error::ApiError;
use super::super::middleware::CurrentUser;
use super::super::state::AppState;
use super::dto::{
    CheckoutRequiredResponse, MembershipResponse, MyClubRowResponse, MyEventRowResponse,
    RegistrationResponse, SetMembershipStatusRequest,
};

/// POST /clubs/join/:club_id - join directly (free) or get a checkout URL.
pub async fn join_club(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let club_id = raw_id
        .parse::<ClubId>()
        .map_err(|_| DomainError::invalid_identifier(&raw_id))?;

    let outcome = state
        .join_club_handler()
        .handle(JoinClubCommand { club_id, caller: caller.email })
        .await?;

    Ok(match outcome {
        JoinOutcome::Joined(membership) => (
            StatusCode::CREATED,
            Json(MembershipResponse::from(membership)),
        )
            .into_response(),
        JoinOutcome::CheckoutRequired { session_id, checkout_url } => {
            Json(CheckoutRequiredResponse { session_id, checkout_url }).into_response()
        }
    })
}

/// POST /events/register/:id - register directly (free) or get a checkout URL.
pub async fn register_for_event(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let event_id = raw_id
        .parse::<EventId>()
        .map_err(|_| DomainError::invalid_identifier(&raw_id))?;

    let outcome = state
        .register_for_event_handler()
        .handle(RegisterForEventCommand { event_id, caller: caller.email })
        .await?;

    Ok(match outcome {
        RegistrationOutcome::Registered(registration) => (
            StatusCode::CREATED,
            Json(RegistrationResponse::from(registration)),
        )
            .into_response(),
        RegistrationOutcome::CheckoutRequired { session_id, checkout_url } => {
            Json(CheckoutRequiredResponse { session_id, checkout_url }).into_response()
        }
    })
}

/// PATCH /memberships/:id - member, owning manager, or admin sets the status.
pub async fn set_membership_status(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
    Json(request): Json<SetMembershipStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let membership_id = raw_id
        .parse::<MembershipId>()
        .map_err(|_| DomainError::invalid_identifier(&raw_id))?;

    state
        .set_membership_status_handler()
        .handle(SetMembershipStatusCommand {
            membership_id,
            status: request.status,
            caller: caller.email,
            caller_role: caller.role,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Query for the public membership probe.
#[derive(Debug, Clone, Deserialize)]
pub struct IsMemberQuery {
    pub club_id: String,
    pub email: String,
}

/// GET /clubs/is-member?club_id=..&email=.. - public membership probe.
pub async fn is_member(
    State(state): State<AppState>,
    Query(query): Query<IsMemberQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = query
        .club_id
        .parse::<ClubId>()
        .map_err(|_| DomainError::invalid_identifier(&query.club_id))?;
    let email = EmailAddress::parse(&query.email).map_err(DomainError::from)?;

    let is_member = state.membership_queries().is_member(&email, &club_id).await?;
    Ok(Json(serde_json::json!({ "is_member": is_member })))
}

/// GET /memberships/mine - clubs the caller belongs to.
pub async fn my_clubs(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.membership_queries().my_clubs(&caller.email).await?;
    let body: Vec<MyClubRowResponse> = rows.into_iter().map(MyClubRowResponse::from).collect();
    Ok(Json(body))
}

/// GET /registrations/mine - events the caller is registered for.
pub async fn my_events(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.membership_queries().my_events(&caller.email).await?;
    let body: Vec<MyEventRowResponse> = rows.into_iter().map(MyEventRowResponse::from).collect();
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::mock_state;
    use crate::application::handlers::club::test_support::{pending_club, MockClubRepository};
    use crate::application::handlers::membership::test_support::MockMembershipRepository;
    use crate::domain::club::ClubStatus;
    use crate::domain::foundation::Role;
    use crate::domain::user::User;
    use std::sync::Arc;

    fn member(email: &str) -> CurrentUser {
        CurrentUser(User::register(EmailAddress::parse(email).unwrap()).with_role(Role::Member))
    }

    #[tokio::test]
    async fn free_join_returns_created() {
        let mut club = pending_club("m@x.com");
        club.status = ClubStatus::Approved;
        let club_id = club.id.to_string();
        let memberships = Arc::new(MockMembershipRepository::new());
        let state = AppState {
            clubs: Arc::new(MockClubRepository::with_club(club)),
            memberships: memberships.clone(),
            ..mock_state()
        };

        let response = join_club(State(state), member("a@x.com"), Path(club_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(memberships.stored().len(), 1);
    }

    #[tokio::test]
    async fn join_of_pending_club_fails() {
        let club = pending_club("m@x.com");
        let club_id = club.id.to_string();
        let state = AppState {
            clubs: Arc::new(MockClubRepository::with_club(club)),
            ..mock_state()
        };

        let result = join_club(State(state), member("a@x.com"), Path(club_id)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn join_rejects_malformed_id() {
        let result = join_club(State(mock_state()), member("a@x.com"), Path("nope".to_string()))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn probe_reports_non_member() {
        let result = is_member(
            State(mock_state()),
            Query(IsMemberQuery {
                club_id: ClubId::new().to_string(),
                email: "a@x.com".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
    }
}
