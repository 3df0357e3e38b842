//! HTTP error mapping.
//!
//! A single mapper converts `DomainError` codes into status + JSON envelope.
//! Internal failures are logged with their details and echoed as a generic
//! message so store and provider internals never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wrapper that turns a `DomainError` into an HTTP response.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidIdentifier
            | ErrorCode::AlreadyMember
            | ErrorCode::AlreadyRegistered
            | ErrorCode::ClubNotApproved
            | ErrorCode::EventFull
            | ErrorCode::CheckoutNotPaid
            | ErrorCode::CheckoutKindMismatch => StatusCode::BAD_REQUEST,
            // Replays of a confirmed checkout are reported as success by the
            // confirm handlers; reaching here means a conflicting write.
            ErrorCode::AlreadyConfirmed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden | ErrorCode::NotAMember => StatusCode::FORBIDDEN,
            ErrorCode::UserNotFound
            | ErrorCode::ClubNotFound
            | ErrorCode::EventNotFound
            | ErrorCode::MembershipNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError
            | ErrorCode::ExternalServiceError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(
                code = %self.0.code,
                message = %self.0.message,
                details = ?self.0.details,
                "request failed"
            );
            "Internal server error".to_string()
        } else {
            self.0.message
        };

        let body = serde_json::json!({
            "error": message,
            "code": self.0.code.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
