//! Command handlers for the catalog.
//!
//! Each handler validates its command before touching the store, then issues
//! the smallest sequence of repository calls that completes the command.

use sweetshop_core::error::DomainError;
use sweetshop_core::repository::{StockDecrement, SweetRepository};
use sweetshop_core::sweet::{Sweet, parse_sweet_id};
use tracing::{info, instrument, warn};

use crate::domain::commands::{CreateSweet, DeleteSweet, PurchaseSweet, RestockSweet};

/// Handles the `CreateSweet` command: validates the fields, rejects a
/// duplicate name, and inserts the sweet.
///
/// # Errors
///
/// Returns the validation error from [`CreateSweet::validate`],
/// `DomainError::DuplicateName` if the name is taken ignoring case, or
/// `DomainError::Infrastructure` if the store fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id))]
pub async fn handle_create_sweet(
    command: &CreateSweet,
    repo: &dyn SweetRepository,
) -> Result<Sweet, DomainError> {
    let new_sweet = command.validate().inspect_err(|e| {
        warn!(reason = %e, "rejected create_sweet command");
    })?;

    if repo.find_by_name(&new_sweet.name).await?.is_some() {
        warn!(name = %new_sweet.name, "sweet name already in use");
        return Err(DomainError::DuplicateName);
    }

    // The store enforces uniqueness as well, so a concurrent insert of the
    // same name also surfaces as DuplicateName.
    let sweet = repo.insert(new_sweet).await?;

    info!(sweet_id = %sweet.id, name = %sweet.name, "sweet created");
    Ok(sweet)
}

/// Handles the `DeleteSweet` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no sweet has the identifier, or
/// `DomainError::Infrastructure` if the identifier is malformed or the store
/// fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, sweet_id = %command.sweet_id))]
pub async fn handle_delete_sweet(
    command: &DeleteSweet,
    repo: &dyn SweetRepository,
) -> Result<Sweet, DomainError> {
    let id = parse_sweet_id(&command.sweet_id)?;

    let removed = repo
        .delete_by_id(id)
        .await?
        .ok_or(DomainError::NotFound(id))?;

    info!(sweet_id = %removed.id, "sweet deleted");
    Ok(removed)
}

/// Handles the `PurchaseSweet` command: removes stock only if enough is
/// available.
///
/// The check and the decrement happen in one conditional store operation,
/// so concurrent purchases cannot overdraw the stock.
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` for a missing or non-positive
/// amount, `DomainError::NotFound` if no sweet has the identifier,
/// `DomainError::InsufficientStock` if the stock is lower than the amount,
/// or `DomainError::Infrastructure` if the identifier is malformed or the
/// store fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, sweet_id = %command.sweet_id))]
pub async fn handle_purchase_sweet(
    command: &PurchaseSweet,
    repo: &dyn SweetRepository,
) -> Result<Sweet, DomainError> {
    let amount = command.amount().inspect_err(|e| {
        warn!(reason = %e, "rejected purchase_sweet command");
    })?;
    let id = parse_sweet_id(&command.sweet_id)?;

    match repo.decrement_stock(id, amount).await? {
        StockDecrement::Applied(sweet) => {
            info!(sweet_id = %sweet.id, amount, remaining = sweet.quantity, "purchase applied");
            Ok(sweet)
        }
        StockDecrement::Insufficient(sweet) => {
            warn!(sweet_id = %sweet.id, amount, available = sweet.quantity, "insufficient stock");
            Err(DomainError::InsufficientStock)
        }
        StockDecrement::Missing => Err(DomainError::NotFound(id)),
    }
}

/// Handles the `RestockSweet` command: atomically adds stock.
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` for a missing or non-positive
/// amount, `DomainError::NotFound` if no sweet has the identifier, or
/// `DomainError::Infrastructure` if the identifier is malformed or the store
/// fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id, sweet_id = %command.sweet_id))]
pub async fn handle_restock_sweet(
    command: &RestockSweet,
    repo: &dyn SweetRepository,
) -> Result<Sweet, DomainError> {
    let amount = command.amount().inspect_err(|e| {
        warn!(reason = %e, "rejected restock_sweet command");
    })?;
    let id = parse_sweet_id(&command.sweet_id)?;

    let sweet = repo
        .increment_stock(id, amount)
        .await?
        .ok_or(DomainError::NotFound(id))?;

    info!(sweet_id = %sweet.id, amount, stock = sweet.quantity, "restock applied");
    Ok(sweet)
}
