//! HTTP adapters - the REST API surface.
//!
//! Each resource has its own module with DTOs, handlers, and a router.
//! `api_router` merges them, attaches the bearer-token middleware, and wraps
//! the result in the tower-http layers (trace, request id, CORS, timeout).

use std::time::Duration;

use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub mod clubs;
pub mod error;
pub mod events;
pub mod memberships;
pub mod middleware;
pub mod payments;
pub mod reports;
pub mod state;
pub mod users;

pub use error::ApiError;
pub use middleware::{auth_middleware, AuthState, CurrentUser, RequireAuth};
pub use state::AppState;

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    // No configured origins means a development setup; stay permissive.
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the full application router.
///
/// The auth middleware resolves bearer tokens into an identity for every
/// route; per-route role guards then decide who gets through.
pub fn api_router(state: AppState, validator: AuthState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(users::routes(&state))
        .merge(clubs::routes(&state))
        .merge(events::routes(&state))
        .merge(memberships::routes(&state))
        .merge(payments::routes(&state))
        .merge(reports::routes(&state))
        .route("/health", get(health))
        .layer(axum_middleware::from_fn_with_state(validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .with_state(state)
}
