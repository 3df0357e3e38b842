//! Club Sphere - Club Membership Platform Backend
//!
//! Users join clubs, clubs host events, paid joins and registrations are
//! settled through an external checkout provider, and admins moderate the
//! catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
