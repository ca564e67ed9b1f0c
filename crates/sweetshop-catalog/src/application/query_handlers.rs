//! Query handlers for the catalog.

use sweetshop_core::error::DomainError;
use sweetshop_core::filter::{SortOrder, SweetFilter};
use sweetshop_core::repository::SweetRepository;
use sweetshop_core::sweet::Sweet;
use tracing::{debug, instrument};

use crate::domain::queries::SearchSweets;

/// Returns every sweet in the store's own order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all)]
pub async fn list_sweets(repo: &dyn SweetRepository) -> Result<Vec<Sweet>, DomainError> {
    repo.find(&SweetFilter::new(), None).await
}

/// Returns the sweets matching `query`, cheapest first.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all)]
pub async fn search_sweets(
    query: &SearchSweets,
    repo: &dyn SweetRepository,
) -> Result<Vec<Sweet>, DomainError> {
    let filter = query.to_filter();
    debug!(?filter, "searching sweets");
    repo.find(&filter, Some(SortOrder::PriceAscending)).await
}

/// Returns each category in use exactly once.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all)]
pub async fn list_categories(repo: &dyn SweetRepository) -> Result<Vec<String>, DomainError> {
    repo.distinct_categories().await
}
