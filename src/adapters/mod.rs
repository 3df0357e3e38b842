//! Adapters - concrete implementations of the ports.
//!
//! - `postgres`: sqlx-backed repositories and read models
//! - `stripe`: checkout provider integration
//! - `auth`: OIDC bearer-token validation
//! - `http`: the REST API surface

pub mod auth;
pub mod http;
pub mod postgres;
pub mod stripe;
