//! Router for membership and registration endpoints.

use axum::routing::{get, patch, post};
use axum::{middleware, Router};

use crate::domain::foundation::RoleRequirement;

use super::super::middleware::{require_role, RoleGuard};
use super::super::state::AppState;
use super::handlers::{
    is_member, join_club, my_clubs, my_events, register_for_event, set_membership_status,
};

/// The probe is public; everything else needs a user record. Status
/// transitions admit the member, the owning manager, or an admin, which the
/// command handler decides.
pub fn routes(state: &AppState) -> Router<AppState> {
    let authenticated = RoleGuard::new(state.users.clone(), RoleRequirement::Authenticated);

    let public = Router::new().route("/clubs/is-member", get(is_member));

    let gated = Router::new()
        .route("/clubs/join/:club_id", post(join_club))
        .route("/events/register/:id", post(register_for_event))
        .route("/memberships/:id", patch(set_membership_status))
        .route("/memberships/mine", get(my_clubs))
        .route("/registrations/mine", get(my_events))
        .route_layer(middleware::from_fn_with_state(authenticated, require_role));

    public.merge(gated)
}
