//! Record builders for tests.

use sweetshop_core::sweet::{NewSweet, Sweet};
use uuid::Uuid;

/// Builds a validated, unsaved sweet.
#[must_use]
pub fn new_sweet(name: &str, category: &str, price: f64, quantity: f64) -> NewSweet {
    NewSweet {
        name: name.to_owned(),
        category: category.to_owned(),
        price,
        quantity,
    }
}

/// Builds a stored sweet with a fresh identifier.
#[must_use]
pub fn sweet(name: &str, category: &str, price: f64, quantity: f64) -> Sweet {
    new_sweet(name, category, price, quantity).into_sweet(Uuid::new_v4())
}
