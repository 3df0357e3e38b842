//! Domain layer: aggregates and value objects with no infrastructure deps.

pub mod club;
pub mod event;
pub mod foundation;
pub mod membership;
pub mod payment;
pub mod user;
