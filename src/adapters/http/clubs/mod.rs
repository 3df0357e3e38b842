//! HTTP adapter for club endpoints.
//!
//! - `GET /clubs`, `GET /clubs/:id` - public catalog
//! - `POST /clubs`, `PATCH /clubs/:id` - manager
//! - `DELETE /clubs/:id` - owning manager or admin
//! - `GET /admin/clubs`, `PATCH /admin/clubs/:id` - admin moderation
//! - `GET /clubs/:id/members` - roster, owning manager or admin

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
