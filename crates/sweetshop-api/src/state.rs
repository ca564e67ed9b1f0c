//! Shared application state.

use std::sync::Arc;

use sweetshop_core::repository::SweetRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store holding the sweets collection.
    pub sweet_repository: Arc<dyn SweetRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(sweet_repository: Arc<dyn SweetRepository>) -> Self {
        Self { sweet_repository }
    }
}
