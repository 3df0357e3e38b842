//! HTTP adapter for user endpoints.
//!
//! - `POST /users` - upsert by email (first sign-in)
//! - `PATCH /users/role/:email` - admin role assignment

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
