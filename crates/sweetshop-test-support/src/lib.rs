//! Shared test repositories and utilities for the Sweet Shop inventory service.

mod fixtures;
mod repository;

pub use fixtures::{new_sweet, sweet};
pub use repository::{FailingSweetRepository, InMemorySweetRepository};
