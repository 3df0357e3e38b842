//! Payment configuration (checkout provider)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Checkout provider secret API key
    pub stripe_api_key: String,

    /// Frontend origin used to build success/cancel redirect URLs
    pub frontend_origin: String,

    /// ISO currency code for all fees
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PaymentConfig {
    /// Check if using test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.starts_with("sk_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !self.frontend_origin.starts_with("http://")
            && !self.frontend_origin.starts_with("https://")
        {
            return Err(ValidationError::InvalidFrontendOrigin);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "usd".to_string()
}
