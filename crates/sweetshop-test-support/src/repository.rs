//! Test repositories: `SweetRepository` implementations for tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use sweetshop_core::error::DomainError;
use sweetshop_core::filter::{SortOrder, SweetFilter};
use sweetshop_core::repository::{StockDecrement, SweetRepository};
use sweetshop_core::sweet::{NewSweet, Sweet};
use uuid::Uuid;

/// A repository that keeps sweets in insertion order behind a mutex.
///
/// Every operation takes the lock once, so the conditional decrement and the
/// uniqueness check on insert are atomic just as they are in `PostgreSQL`.
#[derive(Debug, Default)]
pub struct InMemorySweetRepository {
    sweets: Mutex<Vec<Sweet>>,
}

impl InMemorySweetRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `sweets`.
    #[must_use]
    pub fn with_sweets(sweets: Vec<Sweet>) -> Self {
        Self {
            sweets: Mutex::new(sweets),
        }
    }

    /// Returns a snapshot of every stored sweet.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn snapshot(&self) -> Vec<Sweet> {
        self.sweets.lock().unwrap().clone()
    }
}

#[async_trait]
impl SweetRepository for InMemorySweetRepository {
    async fn insert(&self, sweet: NewSweet) -> Result<Sweet, DomainError> {
        let mut sweets = self.sweets.lock().unwrap();
        let folded = sweet.name.to_lowercase();
        if sweets.iter().any(|s| s.name.to_lowercase() == folded) {
            return Err(DomainError::DuplicateName);
        }
        let stored = sweet.into_sweet(Uuid::new_v4());
        sweets.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Sweet>, DomainError> {
        let folded = name.to_lowercase();
        Ok(self
            .sweets
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.name.to_lowercase() == folded)
            .cloned())
    }

    async fn find(
        &self,
        filter: &SweetFilter,
        order: Option<SortOrder>,
    ) -> Result<Vec<Sweet>, DomainError> {
        let mut found: Vec<Sweet> = self
            .sweets
            .lock()
            .unwrap()
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        if let Some(SortOrder::PriceAscending) = order {
            found.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError> {
        Ok(self
            .sweets
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Sweet>, DomainError> {
        let mut sweets = self.sweets.lock().unwrap();
        Ok(sweets
            .iter()
            .position(|s| s.id == id)
            .map(|index| sweets.remove(index)))
    }

    async fn decrement_stock(
        &self,
        id: Uuid,
        amount: f64,
    ) -> Result<StockDecrement, DomainError> {
        let mut sweets = self.sweets.lock().unwrap();
        let Some(sweet) = sweets.iter_mut().find(|s| s.id == id) else {
            return Ok(StockDecrement::Missing);
        };
        if sweet.quantity < amount {
            return Ok(StockDecrement::Insufficient(sweet.clone()));
        }
        sweet.quantity -= amount;
        Ok(StockDecrement::Applied(sweet.clone()))
    }

    async fn increment_stock(&self, id: Uuid, amount: f64) -> Result<Option<Sweet>, DomainError> {
        let mut sweets = self.sweets.lock().unwrap();
        let Some(sweet) = sweets.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        // DOUBLE PRECISION overflow is an error in Postgres too.
        let restocked = sweet.quantity + amount;
        if !restocked.is_finite() {
            return Err(DomainError::Infrastructure(format!(
                "value out of range: quantity {} + {amount} overflows",
                sweet.quantity
            )));
        }
        sweet.quantity = restocked;
        Ok(Some(sweet.clone()))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError> {
        let sweets = self.sweets.lock().unwrap();
        let mut seen = HashSet::new();
        Ok(sweets
            .iter()
            .filter(|s| seen.insert(s.category.as_str()))
            .map(|s| s.category.clone())
            .collect())
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSweetRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl SweetRepository for FailingSweetRepository {
    async fn insert(&self, _sweet: NewSweet) -> Result<Sweet, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Sweet>, DomainError> {
        Err(connection_refused())
    }

    async fn find(
        &self,
        _filter: &SweetFilter,
        _order: Option<SortOrder>,
    ) -> Result<Vec<Sweet>, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Sweet>, DomainError> {
        Err(connection_refused())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<Option<Sweet>, DomainError> {
        Err(connection_refused())
    }

    async fn decrement_stock(
        &self,
        _id: Uuid,
        _amount: f64,
    ) -> Result<StockDecrement, DomainError> {
        Err(connection_refused())
    }

    async fn increment_stock(
        &self,
        _id: Uuid,
        _amount: f64,
    ) -> Result<Option<Sweet>, DomainError> {
        Err(connection_refused())
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, DomainError> {
        Err(connection_refused())
    }
}
