//! HTTP adapter for event endpoints.
//!
//! - `GET /events`, `GET /events/:id`, `GET /clubs/:id/events` - public
//! - `POST /events`, `PATCH /events/:id` - owning manager
//! - `DELETE /events/:id` - owning manager or admin

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
