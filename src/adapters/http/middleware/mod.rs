//! HTTP middleware: authentication and role gating.

pub mod auth;
pub mod role;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
pub use role::{require_role, CurrentUser, RoleGuard};
