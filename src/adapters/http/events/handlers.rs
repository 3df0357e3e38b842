//! HTTP handlers for event catalog endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::event::{
    CreateEventCommand, DeleteEventCommand, UpdateEventCommand,
};
use crate::domain::foundation::{ClubId, DomainError, EventId};

use super::super::error::ApiError;
use super::super::middleware::CurrentUser;
use super::super::state::AppState;
use super::dto::{CreateEventRequest, EventResponse, UpdateEventRequest};

fn parse_event_id(raw: &str) -> Result<EventId, DomainError> {
    raw.parse::<EventId>()
        .map_err(|_| DomainError::invalid_identifier(raw))
}

/// GET /events - all events.
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let events = state.event_queries().list().await?;
    let body: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(body))
}

/// GET /events/:id - event detail.
pub async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = parse_event_id(&raw_id)?;
    let event = state.event_queries().get(&event_id).await?;
    Ok(Json(EventResponse::from(event)))
}

/// GET /clubs/:id/events - events hosted by one club.
pub async fn list_club_events(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let club_id = raw_id
        .parse::<ClubId>()
        .map_err(|_| DomainError::invalid_identifier(&raw_id))?;
    let events = state.event_queries().list_by_club(&club_id).await?;
    let body: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();
    Ok(Json(body))
}

/// POST /events - owning manager schedules an event.
pub async fn create_event(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = request.into_new_event(caller.email)?;
    let event = state
        .create_event_handler()
        .handle(CreateEventCommand { input })
        .await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// PATCH /events/:id - owning manager edits event fields.
pub async fn update_event(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = parse_event_id(&raw_id)?;
    let event = state
        .update_event_handler()
        .handle(UpdateEventCommand {
            event_id,
            caller: caller.email,
            update: request.into_update()?,
        })
        .await?;
    Ok(Json(EventResponse::from(event)))
}

/// DELETE /events/:id - owning manager or admin.
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let event_id = parse_event_id(&raw_id)?;
    state
        .delete_event_handler()
        .handle(DeleteEventCommand {
            event_id,
            caller: caller.email,
            caller_role: caller.role,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
