//! HTTP adapter for checkout confirmation.
//!
//! - `POST /payments/confirm` - settle a paid club join
//! - `POST /payments/confirm/event` - settle a paid event registration

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
