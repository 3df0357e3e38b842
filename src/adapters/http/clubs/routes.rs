//! Router for club catalog, moderation, and roster endpoints.

use axum::routing::{delete, get, patch, post};
use axum::{middleware, Router};

use crate::domain::foundation::{Role, RoleRequirement};

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{
    admin_list_clubs, club_roster, create_club, delete_club, get_club, list_clubs, moderate_club,
    update_club,
};

/// Catalog reads are public; writes are role-gated. Deletion admits the
/// owning manager or an admin, so the route carries only the authenticated
/// guard and the handler decides.
pub fn routes(state: &AppState) -> Router<AppState> {
    let manager = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Manager));
    let admin = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Admin));
    let authenticated = RoleGuard::new(state.users.clone(), RoleRequirement::Authenticated);

    let public = Router::new()
        .route("/clubs", get(list_clubs))
        .route("/clubs/:id", get(get_club));

    let manager_routes = Router::new()
        .route("/clubs", post(create_club))
        .route("/clubs/:id", patch(update_club))
        .route_layer(middleware::from_fn_with_state(manager, require_role));

    let admin_routes = Router::new()
        .route("/admin/clubs", get(admin_list_clubs))
        .route("/admin/clubs/:id", patch(moderate_club))
        .route_layer(middleware::from_fn_with_state(admin, require_role));

    let gated = Router::new()
        .route("/clubs/:id", delete(delete_club))
        .route("/clubs/:id/members", get(club_roster))
        .route_layer(middleware::from_fn_with_state(authenticated, require_role));

    public.merge(manager_routes).merge(admin_routes).merge(gated)
}
