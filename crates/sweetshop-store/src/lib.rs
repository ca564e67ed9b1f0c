//! Sweet Shop Store: `PostgreSQL` persistence for sweets.

pub mod pg_sweet_repository;
pub mod schema;

/// Embedded schema migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
