//! Club Sphere server binary.
//!
//! Loads configuration from the environment, connects to Postgres, wires the
//! adapters into the application state, and serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use club_sphere::adapters::auth::{OidcConfig, OidcSessionValidator};
use club_sphere::adapters::http::{api_router, AppState};
use club_sphere::adapters::postgres::{
    PostgresClubRepository, PostgresEventRepository, PostgresLedgerReader,
    PostgresMembershipRepository, PostgresPaymentLedger, PostgresRegistrationRepository,
    PostgresReportingReader, PostgresUserRepository,
};
use club_sphere::adapters::stripe::{StripeCheckoutAdapter, StripeConfig};
use club_sphere::application::handlers::checkout::CheckoutSettings;
use club_sphere::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting club-sphere"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let validator = Arc::new(OidcSessionValidator::new(
        OidcConfig::new(config.auth.issuer_url.clone(), config.auth.audience.clone())
            .with_cache_duration(Duration::from_secs(config.auth.jwks_cache_secs)),
    )?);

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        clubs: Arc::new(PostgresClubRepository::new(pool.clone())),
        events: Arc::new(PostgresEventRepository::new(pool.clone())),
        memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
        registrations: Arc::new(PostgresRegistrationRepository::new(pool.clone())),
        ledger_reader: Arc::new(PostgresLedgerReader::new(pool.clone())),
        payment_ledger: Arc::new(PostgresPaymentLedger::new(pool.clone())),
        checkout_provider: Arc::new(StripeCheckoutAdapter::new(StripeConfig::new(
            config.payment.stripe_api_key.clone(),
        ))),
        reporting: Arc::new(PostgresReportingReader::new(pool)),
        checkout_settings: CheckoutSettings {
            currency: config.payment.currency.clone(),
            frontend_origin: config.payment.frontend_origin.clone(),
        },
    };

    let app = api_router(state, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
