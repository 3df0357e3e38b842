//! Command and query handlers, wired from `Arc<dyn Port>` dependencies.

pub mod checkout;
pub mod club;
pub mod event;
pub mod membership;
pub mod reporting;
pub mod user;
