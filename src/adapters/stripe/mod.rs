//! Stripe adapter for the checkout provider port.

mod checkout_adapter;

pub use checkout_adapter::{StripeCheckoutAdapter, StripeConfig};
