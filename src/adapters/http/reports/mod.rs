//! HTTP adapter for reporting dashboards.
//!
//! - `GET /admin/stats` - platform-wide stats (admin)
//! - `GET /manager/overview` - managed clubs overview (manager)
//! - `GET /member/stats` - caller's participation summary

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::routes;
