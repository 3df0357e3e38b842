//! Application layer: one command/query handler per operation.

pub mod handlers;
