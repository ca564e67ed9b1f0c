//! Sweet Shop: catalog validation and stock management.
//!
//! Responsible for validating incoming requests, enforcing the naming and
//! stock rules, and translating searches into store filters.

pub mod application;
pub mod domain;
