//! Application-level handlers that run validated requests against a store.

pub mod command_handlers;
pub mod query_handlers;
