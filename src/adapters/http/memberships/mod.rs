//! HTTP adapter for membership endpoints.
//!
//! - `POST /clubs/join/:club_id` - join a club (free or via checkout)
//! - `POST /events/register/:id` - register for an event
//! - `PATCH /memberships/:id` - status transition
//! - `GET /clubs/is-member` - public membership probe
//! - `GET /memberships/mine`, `GET /registrations/mine` - caller views

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
