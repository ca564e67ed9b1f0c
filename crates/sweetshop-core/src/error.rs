//! Domain error types.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Direction of a stock movement, used to word quantity validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockMovement {
    /// Stock leaves the shop.
    Purchase,
    /// Stock arrives at the shop.
    Restock,
}

impl fmt::Display for StockMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchase => f.write_str("purchase"),
            Self::Restock => f.write_str("restock"),
        }
    }
}

/// Top-level domain error type.
///
/// The `Display` text of every variant except `Infrastructure` is the exact
/// message returned to API clients.
#[derive(Debug, Error)]
pub enum DomainError {
    /// `name`, `category`, `price` or `quantity` is absent or blank.
    #[error("Missing required fields")]
    MissingFields,

    /// `price` or `quantity` is not a number.
    #[error("Price and quantity must be valid numbers")]
    InvalidNumeric,

    /// `price` is not strictly positive or `quantity` is negative.
    #[error("Price and quantity must be positive numbers")]
    OutOfRange,

    /// Another sweet already uses this name, ignoring case.
    #[error("A sweet with this name already exists")]
    DuplicateName,

    /// A purchase or restock amount is absent, non-numeric or not positive.
    #[error("A positive {0} quantity is required")]
    InvalidQuantity(StockMovement),

    /// A purchase asked for more than is in stock.
    #[error("Insufficient stock")]
    InsufficientStock,

    /// No sweet has the requested identifier.
    #[error("Sweet not found")]
    NotFound(Uuid),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
