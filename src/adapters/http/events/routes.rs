//! Router for event endpoints.

use axum::routing::{delete, get, patch, post};
use axum::{middleware, Router};

use crate::domain::foundation::{Role, RoleRequirement};

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{
    create_event, delete_event, get_event, list_club_events, list_events, update_event,
};

pub fn routes(state: &AppState) -> Router<AppState> {
    let manager = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Manager));
    let authenticated = RoleGuard::new(state.users.clone(), RoleRequirement::Authenticated);

    let public = Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/clubs/:id/events", get(list_club_events));

    let manager_routes = Router::new()
        .route("/events", post(create_event))
        .route("/events/:id", patch(update_event))
        .route_layer(middleware::from_fn_with_state(manager, require_role));

    let gated = Router::new()
        .route("/events/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(authenticated, require_role));

    public.merge(manager_routes).merge(gated)
}
