//! Authentication configuration (OIDC identity provider)

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// OIDC issuer URL; also the base for JWKS discovery
    pub issuer_url: String,

    /// Expected audience claim in tokens
    pub audience: String,

    /// JWKS cache duration in seconds
    #[serde(default = "default_jwks_cache_secs")]
    pub jwks_cache_secs: u64,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.issuer_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_ISSUER_URL"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_AUDIENCE"));
        }
        if *environment == Environment::Production && !self.issuer_url.starts_with("https://") {
            return Err(ValidationError::IssuerMustBeHttps);
        }
        Ok(())
    }
}

fn default_jwks_cache_secs() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AuthConfig {
        AuthConfig {
            issuer_url: "https://auth.example.com".to_string(),
            audience: "club-sphere-api".to_string(),
            jwks_cache_secs: default_jwks_cache_secs(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate(&Environment::Development).is_ok());
        assert!(valid_config().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn http_issuer_rejected_in_production_only() {
        let config = AuthConfig {
            issuer_url: "http://auth.local".to_string(),
            ..valid_config()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn empty_audience_fails() {
        let config = AuthConfig { audience: String::new(), ..valid_config() };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
