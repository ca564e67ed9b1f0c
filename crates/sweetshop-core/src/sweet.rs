//! The sweet record and its identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    /// Store-assigned identifier, immutable after creation.
    pub id: Uuid,
    /// Display name, unique ignoring case.
    pub name: String,
    /// Free-form category label.
    pub category: String,
    /// Unit price, always strictly positive.
    pub price: f64,
    /// Units in stock, never negative. May be fractional.
    pub quantity: f64,
}

/// A validated sweet that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSweet {
    /// Name as submitted; not blank.
    pub name: String,
    /// Category as submitted; not blank.
    pub category: String,
    /// Strictly positive price.
    pub price: f64,
    /// Non-negative opening stock.
    pub quantity: f64,
}

impl NewSweet {
    /// Attaches a store-assigned identifier, producing the stored record.
    #[must_use]
    pub fn into_sweet(self, id: Uuid) -> Sweet {
        Sweet {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Parses a raw path segment into a sweet identifier.
///
/// A malformed identifier is reported the same way the store reports any
/// other failure, so callers see the operation's generic persistence error.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if `raw` is not a valid UUID.
pub fn parse_sweet_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|e| {
        DomainError::Infrastructure(format!("malformed sweet identifier {raw:?}: {e}"))
    })
}
