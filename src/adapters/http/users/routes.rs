//! Router for user endpoints.

use axum::routing::{patch, post};
use axum::{middleware, Router};

use crate::domain::foundation::{Role, RoleRequirement};

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{set_user_role, upsert_user};

/// `POST /users` is open (first sign-in upsert); role assignment is
/// admin-only.
pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Admin));

    Router::new().route("/users", post(upsert_user)).route(
        "/users/role/:email",
        patch(set_user_role)
            .route_layer(middleware::from_fn_with_state(admin, require_role)),
    )
}
