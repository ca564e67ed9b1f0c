//! Commands for the catalog, with the validation rules they carry.

use serde_json::Value;
use sweetshop_core::error::{DomainError, StockMovement};
use sweetshop_core::sweet::NewSweet;
use uuid::Uuid;

/// Command to add a new sweet to the catalog.
///
/// Fields hold the request values as received; [`CreateSweet::validate`]
/// turns them into a `NewSweet`.
#[derive(Debug, Clone)]
pub struct CreateSweet {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Requested name.
    pub name: Option<Value>,
    /// Requested category.
    pub category: Option<Value>,
    /// Requested unit price.
    pub price: Option<Value>,
    /// Requested opening stock.
    pub quantity: Option<Value>,
}

impl CreateSweet {
    /// Applies the field rules in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingFields` if `name` or `category` is absent
    /// or blank, or if `price` or `quantity` is absent.
    /// Returns `DomainError::InvalidNumeric` if `price` or `quantity` is not a
    /// number.
    /// Returns `DomainError::OutOfRange` if `price <= 0` or `quantity < 0`.
    pub fn validate(&self) -> Result<NewSweet, DomainError> {
        let name = non_blank(self.name.as_ref());
        let category = non_blank(self.category.as_ref());
        let (Some(name), Some(category), Some(price), Some(quantity)) = (
            name,
            category,
            present(self.price.as_ref()),
            present(self.quantity.as_ref()),
        ) else {
            return Err(DomainError::MissingFields);
        };

        let (Some(price), Some(quantity)) = (numeric(price), numeric(quantity)) else {
            return Err(DomainError::InvalidNumeric);
        };

        if price <= 0.0 || quantity < 0.0 {
            return Err(DomainError::OutOfRange);
        }

        Ok(NewSweet {
            name: name.to_owned(),
            category: category.to_owned(),
            price,
            quantity,
        })
    }
}

/// Command to remove a sweet.
#[derive(Debug, Clone)]
pub struct DeleteSweet {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier exactly as it appeared in the request path.
    pub sweet_id: String,
}

/// Command to sell some of a sweet's stock.
#[derive(Debug, Clone)]
pub struct PurchaseSweet {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier exactly as it appeared in the request path.
    pub sweet_id: String,
    /// Amount to remove from stock.
    pub quantity: Option<Value>,
}

impl PurchaseSweet {
    /// Returns the requested amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` unless the amount is a strictly
    /// positive number.
    pub fn amount(&self) -> Result<f64, DomainError> {
        positive_amount(self.quantity.as_ref(), StockMovement::Purchase)
    }
}

/// Command to add stock to a sweet.
#[derive(Debug, Clone)]
pub struct RestockSweet {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier exactly as it appeared in the request path.
    pub sweet_id: String,
    /// Amount to add to stock.
    pub quantity: Option<Value>,
}

impl RestockSweet {
    /// Returns the requested amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` unless the amount is a strictly
    /// positive number.
    pub fn amount(&self) -> Result<f64, DomainError> {
        positive_amount(self.quantity.as_ref(), StockMovement::Restock)
    }
}

/// JSON `null` counts as absent.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// String content as submitted, or `None` for absent, blank or non-string
/// values. Surrounding whitespace only matters for the blank check.
fn non_blank(value: Option<&Value>) -> Option<&str> {
    present(value)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Accepts JSON numbers and strings holding a finite decimal number.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn positive_amount(value: Option<&Value>, movement: StockMovement) -> Result<f64, DomainError> {
    present(value)
        .and_then(numeric)
        .filter(|amount| *amount > 0.0)
        .ok_or(DomainError::InvalidQuantity(movement))
}
