//! Authentication types for the domain layer.
//!
//! These types represent an authenticated caller extracted from a verified
//! bearer token. They have **no provider dependencies** - any OIDC provider
//! can populate them via the `SessionValidator` port.

use super::EmailAddress;
use thiserror::Error;

/// Authenticated caller extracted from a validated token.
///
/// The verified email is the identity every downstream handler keys on;
/// membership, registration, and payment records all reference it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Verified email address from the token claims.
    pub email: EmailAddress,

    /// Display name if the provider supplied one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(email: EmailAddress, display_name: Option<String>) -> Self {
        Self { email, display_name }
    }
}

/// Authentication errors that can occur during token validation.
///
/// Verification failure is terminal for the request; there are no retries.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The token verified but carried no usable email claim.
    #[error("Token has no verified email")]
    MissingEmail,

    /// The identity provider is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the caller should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::MissingEmail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_email() -> EmailAddress {
        EmailAddress::parse("test@example.com").unwrap()
    }

    #[test]
    fn authenticated_user_carries_verified_email() {
        let user = AuthenticatedUser::new(test_email(), Some("Test User".to_string()));
        assert_eq!(user.email.as_str(), "test@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Test User"));
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(AuthError::MissingEmail.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
    }
}
