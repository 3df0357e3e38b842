//! Router for reporting endpoints. Each dashboard carries its own guard.

use axum::routing::get;
use axum::{middleware, Router};

use crate::domain::foundation::{Role, RoleRequirement};

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{manager_overview, member_stats, platform_stats};

pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Admin));
    let manager = RoleGuard::new(state.users.clone(), RoleRequirement::Exactly(Role::Manager));
    let authenticated = RoleGuard::new(state.users.clone(), RoleRequirement::Authenticated);

    let admin_routes = Router::new()
        .route("/admin/stats", get(platform_stats))
        .route_layer(middleware::from_fn_with_state(admin, require_role));

    let manager_routes = Router::new()
        .route("/manager/overview", get(manager_overview))
        .route_layer(middleware::from_fn_with_state(manager, require_role));

    let member_routes = Router::new()
        .route("/member/stats", get(member_stats))
        .route_layer(middleware::from_fn_with_state(authenticated, require_role));

    admin_routes.merge(manager_routes).merge(member_routes)
}
