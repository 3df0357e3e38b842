//! Router for checkout confirmation endpoints.

use axum::routing::post;
use axum::{middleware, Router};

use crate::domain::foundation::RoleRequirement;

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{confirm_club_checkout, confirm_event_checkout};

pub fn routes(state: &AppState) -> Router<AppState> {
    let authenticated = RoleGuard::new(state.users.clone(), RoleRequirement::Authenticated);

    Router::new()
        .route("/payments/confirm", post(confirm_club_checkout))
        .route("/payments/confirm/event", post(confirm_event_checkout))
        .route_layer(middleware::from_fn_with_state(authenticated, require_role))
}
