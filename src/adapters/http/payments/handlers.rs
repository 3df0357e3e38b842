//! HTTP handlers for settling paid checkouts after the provider redirect.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::checkout::{
    ConfirmClubCheckoutCommand, ConfirmEventCheckoutCommand,
};

use super::super::error::ApiError;
use super::super::middleware::CurrentUser;
use super::super::state::AppState;
use super::dto::{ClubConfirmationResponse, ConfirmCheckoutRequest, EventConfirmationResponse};

/// POST /payments/confirm - settle a paid club join.
pub async fn confirm_club_checkout(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<ConfirmCheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let confirmation = state
        .confirm_club_checkout_handler()
        .handle(ConfirmClubCheckoutCommand {
            session_id: request.session_id,
            caller: caller.email,
        })
        .await?;

    Ok(Json(ClubConfirmationResponse::from(confirmation)))
}

/// POST /payments/confirm/event - settle a paid event registration.
pub async fn confirm_event_checkout(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<ConfirmCheckoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let confirmation = state
        .confirm_event_checkout_handler()
        .handle(ConfirmEventCheckoutCommand {
            session_id: request.session_id,
            caller: caller.email,
        })
        .await?;

    Ok(Json(EventConfirmationResponse::from(confirmation)))
}
