//! Authentication adapters.

mod oidc;

pub use oidc::{OidcConfig, OidcSessionValidator};
