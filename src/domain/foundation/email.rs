//! Email address value object.
//!
//! Emails are the natural key connecting users to memberships, registrations,
//! and payments, so they are normalized (trimmed, lowercased) once at
//! construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalizes an email address.
    ///
    /// Validation is intentionally shallow (non-empty local part and domain
    /// with a dot); the identity provider has already verified ownership.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            ));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let email = EmailAddress::parse("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn parse_rejects_missing_at() {
        assert!(EmailAddress::parse("alice.example.com").is_err());
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!(EmailAddress::parse("@example.com").is_err());
        assert!(EmailAddress::parse("alice@").is_err());
        assert!(EmailAddress::parse("").is_err());
    }

    #[test]
    fn parse_rejects_domain_without_dot() {
        assert!(EmailAddress::parse("alice@localhost").is_err());
    }

    #[test]
    fn equal_after_normalization() {
        let a = EmailAddress::parse("m@x.com").unwrap();
        let b = EmailAddress::parse("M@X.COM").unwrap();
        assert_eq!(a, b);
    }
}
