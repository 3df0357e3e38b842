//! HTTP handlers for user endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::foundation::{DomainError, EmailAddress};

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{SetRoleRequest, UpsertUserRequest, UserResponse};

/// POST /users - upsert by email, default role member.
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(request): Json<UpsertUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = EmailAddress::parse(&request.email).map_err(DomainError::from)?;

    let result = state
        .upsert_user_handler()
        .handle(crate::application::handlers::user::UpsertUserCommand { email })
        .await?;

    let status = if result.created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(UserResponse::from(result.user))))
}

/// PATCH /users/role/:email - admin role assignment.
pub async fn set_user_role(
    State(state): State<AppState>,
    Path(raw_email): Path<String>,
    Json(request): Json<SetRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = EmailAddress::parse(&raw_email).map_err(DomainError::from)?;

    state
        .set_user_role_handler()
        .handle(crate::application::handlers::user::SetUserRoleCommand {
            email,
            role: request.role,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
