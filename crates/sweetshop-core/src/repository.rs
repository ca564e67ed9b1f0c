//! Sweet repository abstraction.
//!
//! This is the full contract the catalog needs from a store. Each method is
//! a single round trip; none of them spans a transaction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;
use crate::filter::{SortOrder, SweetFilter};
use crate::sweet::{NewSweet, Sweet};

/// Outcome of a conditional stock decrement.
#[derive(Debug, Clone, PartialEq)]
pub enum StockDecrement {
    /// The stock covered the request and has been reduced.
    Applied(Sweet),
    /// The sweet exists but holds less than requested; it was not modified.
    Insufficient(Sweet),
    /// No sweet has the identifier.
    Missing,
}

/// Repository trait for storing and querying sweets.
#[async_trait]
pub trait SweetRepository: Send + Sync {
    /// Inserts a new sweet and returns it with its assigned identifier.
    ///
    /// Stores must reject a name that already exists ignoring case with
    /// `DomainError::DuplicateName`, independently of any prior lookup.
    async fn insert(&self, sweet: NewSweet) -> Result<Sweet, DomainError>;

    /// Finds the sweet whose name equals `name` ignoring case.
    async fn find_by_name(&self, name: &str) -> Result<Option<Sweet>, DomainError>;

    /// Finds all sweets matching `filter`, optionally ordered.
    async fn find(
        &self,
        filter: &SweetFilter,
        order: Option<SortOrder>,
    ) -> Result<Vec<Sweet>, DomainError>;

    /// Finds a sweet by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError>;

    /// Removes a sweet and returns what was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError>;

    /// Atomically subtracts `amount` from the stock if at least `amount` is
    /// available.
    async fn decrement_stock(&self, id: Uuid, amount: f64)
    -> Result<StockDecrement, DomainError>;

    /// Atomically adds `amount` to the stock and returns the updated sweet.
    async fn increment_stock(&self, id: Uuid, amount: f64) -> Result<Option<Sweet>, DomainError>;

    /// Returns every distinct category value, in no particular order.
    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError>;
}
