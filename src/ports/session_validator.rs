//! Session validator port for bearer token verification.
//!
//! Keeps the HTTP layer provider-agnostic: the OIDC adapter, or a mock in
//! tests, resolves a raw bearer token to a verified email.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Port for validating inbound bearer credentials.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Verifies a bearer token and resolves it to an authenticated user.
    ///
    /// Verification failure is terminal for the request; implementations do
    /// not retry.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
