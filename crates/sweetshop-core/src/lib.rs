//! Sweet Shop Core: shared domain abstractions.
//!
//! This crate defines the sweet record, the typed search filter, the error
//! taxonomy and the persistence contract that the catalog depends on. It
//! contains no infrastructure code.

pub mod error;
pub mod filter;
pub mod repository;
pub mod sweet;
