//! Declarative role guard.
//!
//! Each gated route group declares a [`RoleRequirement`]; this one middleware
//! loads the caller's user record by verified email, evaluates the
//! requirement, and stores the record for handlers. Handlers read the caller
//! through [`CurrentUser`] and never hand-roll role checks; ownership checks
//! stay in the command handlers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthenticatedUser, RoleRequirement};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// State for the role guard: the user store plus the declared requirement.
#[derive(Clone)]
pub struct RoleGuard {
    pub users: Arc<dyn UserRepository>,
    pub requirement: RoleRequirement,
}

impl RoleGuard {
    pub fn new(users: Arc<dyn UserRepository>, requirement: RoleRequirement) -> Self {
        Self { users, requirement }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authentication required",
            "code": "UNAUTHORIZED",
        })),
    )
        .into_response()
}

fn forbidden(requirement: RoleRequirement) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(serde_json::json!({
            "error": format!("This action requires the {} role", requirement),
            "code": "FORBIDDEN",
        })),
    )
        .into_response()
}

/// Enforces the declared requirement and injects the stored [`User`].
pub async fn require_role(
    State(guard): State<RoleGuard>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(identity) = request.extensions().get::<AuthenticatedUser>().cloned() else {
        return unauthorized();
    };

    let user = match guard.users.find_by_email(&identity.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::debug!(requirement = %guard.requirement, "caller has no user record");
            return forbidden(guard.requirement);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load caller user record");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Internal server error",
                    "code": "INTERNAL_ERROR",
                })),
            )
                .into_response();
        }
    };

    if !guard.requirement.satisfied_by(user.role) {
        tracing::debug!(
            role = %user.role,
            requirement = %guard.requirement,
            "role requirement not met"
        );
        return forbidden(guard.requirement);
    }

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

/// Extractor for the caller's stored user record, set by [`require_role`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = super::auth::AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CurrentUser>()
                .cloned()
                .ok_or(super::auth::AuthRejection::Unauthenticated)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::user::test_support::MockUserRepository;
    use crate::domain::foundation::{EmailAddress, Role};
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn identity(email: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(EmailAddress::parse(email).unwrap(), None)
    }

    fn guarded_app(guard: RoleGuard) -> Router {
        Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(guard, require_role))
    }

    async fn send(app: Router, identity: Option<AuthenticatedUser>) -> StatusCode {
        let mut request = HttpRequest::builder()
            .uri("/guarded")
            .body(Body::empty())
            .unwrap();
        if let Some(identity) = identity {
            request.extensions_mut().insert(identity);
        }
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn admits_matching_role() {
        let email = EmailAddress::parse("admin@x.com").unwrap();
        let user = User::register(email).with_role(Role::Admin);
        let guard = RoleGuard::new(
            Arc::new(MockUserRepository::with_user(user)),
            RoleRequirement::Exactly(Role::Admin),
        );

        let status = send(guarded_app(guard), Some(identity("admin@x.com"))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_wrong_role_with_403() {
        let email = EmailAddress::parse("member@x.com").unwrap();
        let user = User::register(email);
        let guard = RoleGuard::new(
            Arc::new(MockUserRepository::with_user(user)),
            RoleRequirement::Exactly(Role::Admin),
        );

        let status = send(guarded_app(guard), Some(identity("member@x.com"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn rejects_unknown_caller_with_403() {
        let guard = RoleGuard::new(
            Arc::new(MockUserRepository::new()),
            RoleRequirement::Authenticated,
        );

        let status = send(guarded_app(guard), Some(identity("ghost@x.com"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn rejects_missing_identity_with_401() {
        let guard = RoleGuard::new(
            Arc::new(MockUserRepository::new()),
            RoleRequirement::Authenticated,
        );

        let status = send(guarded_app(guard), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
