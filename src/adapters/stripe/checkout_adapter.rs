//! Stripe checkout adapter.
//!
//! Implements `CheckoutProvider` against the Stripe Checkout Sessions API.
//! Sessions are created in `payment` mode with the action's identity carried
//! as metadata; confirmation retrieves the session by id and reads the
//! payment status and metadata back.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::foundation::{ClubId, EmailAddress, EventId, Money};
use crate::ports::{
    CheckoutError, CheckoutKind, CheckoutMetadata, CheckoutProvider, CheckoutSession,
    CreateCheckoutSession, RetrievedCheckout, SessionPaymentStatus,
};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,
    /// Base URL for the Stripe API.
    api_base_url: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Overrides the API base URL (for testing against a local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe implementation of CheckoutProvider.
pub struct StripeCheckoutAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeCheckoutAdapter {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

/// Wire shape of a Stripe checkout session, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    url: Option<String>,
    payment_status: Option<String>,
    amount_total: Option<i64>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

fn metadata_params(metadata: &CheckoutMetadata) -> Vec<(String, String)> {
    let mut params = vec![
        ("metadata[user_email]".to_string(), metadata.user_email.to_string()),
        ("metadata[kind]".to_string(), metadata.kind.as_str().to_string()),
        ("metadata[club_id]".to_string(), metadata.club_id.to_string()),
    ];
    if let Some(event_id) = metadata.event_id {
        params.push(("metadata[event_id]".to_string(), event_id.to_string()));
    }
    params
}

/// Reassembles the metadata attached at session creation. Returns `None`
/// when any required key is missing or malformed, so a foreign or
/// hand-crafted session can never be committed.
fn parse_metadata(raw: &HashMap<String, String>) -> Option<CheckoutMetadata> {
    let user_email = EmailAddress::parse(raw.get("user_email")?).ok()?;
    let kind = CheckoutKind::parse(raw.get("kind")?)?;
    let club_id = raw.get("club_id")?.parse::<ClubId>().ok()?;
    let event_id = match raw.get("event_id") {
        Some(value) => Some(value.parse::<EventId>().ok()?),
        None => None,
    };
    Some(CheckoutMetadata { user_email, kind, club_id, event_id })
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutAdapter {
    async fn create_session(
        &self,
        request: CreateCheckoutSession,
    ) -> Result<CheckoutSession, CheckoutError> {
        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let mut params = vec![
            ("mode".to_string(), "payment".to_string()),
            ("customer_email".to_string(), request.metadata.user_email.to_string()),
            (
                "line_items[0][price_data][currency]".to_string(),
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.product_name.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                request.amount.as_cents().to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
        ];
        params.extend(metadata_params(&request.metadata));

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| CheckoutError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(error = %error_text, "Stripe create session failed");
            return Err(CheckoutError::Rejected(format!(
                "Stripe API error: {}",
                error_text
            )));
        }

        let session: StripeSession = response
            .json()
            .await
            .map_err(|e| CheckoutError::Rejected(format!("Failed to parse Stripe response: {}", e)))?;

        let checkout_url = session.url.ok_or_else(|| {
            CheckoutError::Rejected("Stripe session carries no checkout URL".to_string())
        })?;

        Ok(CheckoutSession { id: session.id, url: checkout_url })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<RetrievedCheckout, CheckoutError> {
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            self.config.api_base_url, session_id
        );

        let response = self
            .http_client
            .get(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| CheckoutError::Unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CheckoutError::SessionNotFound(session_id.to_string()));
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Rejected(format!(
                "Stripe API error: {}",
                error_text
            )));
        }

        let session: StripeSession = response
            .json()
            .await
            .map_err(|e| CheckoutError::Rejected(format!("Failed to parse Stripe response: {}", e)))?;

        let payment_status = match session.payment_status.as_deref() {
            Some("paid") => SessionPaymentStatus::Paid,
            _ => SessionPaymentStatus::Unpaid,
        };
        let amount_total = Money::from_cents(session.amount_total.unwrap_or(0).max(0))
            .unwrap_or(Money::ZERO);

        Ok(RetrievedCheckout {
            id: session.id,
            payment_status,
            amount_total,
            metadata: parse_metadata(&session.metadata),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> CheckoutMetadata {
        CheckoutMetadata {
            user_email: EmailAddress::parse("a@b.com").unwrap(),
            kind: CheckoutKind::EventRegistration,
            club_id: ClubId::new(),
            event_id: Some(EventId::new()),
        }
    }

    #[test]
    fn metadata_survives_the_wire_format() {
        let metadata = sample_metadata();
        let raw: HashMap<String, String> = metadata_params(&metadata)
            .into_iter()
            .map(|(k, v)| (k.trim_start_matches("metadata[").trim_end_matches(']').to_string(), v))
            .collect();

        assert_eq!(parse_metadata(&raw), Some(metadata));
    }

    #[test]
    fn club_join_metadata_omits_event_id() {
        let mut metadata = sample_metadata();
        metadata.kind = CheckoutKind::ClubJoin;
        metadata.event_id = None;

        let params = metadata_params(&metadata);
        assert!(params.iter().all(|(k, _)| k != "metadata[event_id]"));
    }

    #[test]
    fn tampered_metadata_parses_to_none() {
        let metadata = sample_metadata();
        let mut raw: HashMap<String, String> = metadata_params(&metadata)
            .into_iter()
            .map(|(k, v)| (k.trim_start_matches("metadata[").trim_end_matches(']').to_string(), v))
            .collect();

        raw.insert("kind".to_string(), "subscription".to_string());
        assert_eq!(parse_metadata(&raw), None);

        raw.remove("kind");
        assert_eq!(parse_metadata(&raw), None);
    }

    #[test]
    fn foreign_session_without_metadata_parses_to_none() {
        assert_eq!(parse_metadata(&HashMap::new()), None);
    }
}
