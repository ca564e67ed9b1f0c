//! Commands, queries and the rules that validate them.

pub mod commands;
pub mod queries;
