//! Shared application state for the todo HTTP API.
//!
//! [`AppState`] owns the single [`TodoStore`] behind a read-write lock.

use std::sync::Arc;

use todos_core::{ActionError, ActionOutcome, ActionRequest, TodoStore};
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The todo list.
    pub store: Arc<RwLock<TodoStore>>,
}

impl AppState {
    /// Create a new application state with an empty store.
    pub fn new() -> Self {
        Self::with_store(TodoStore::new())
    }

    /// Create a new application state around an existing store.
    pub fn with_store(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Validate and apply a request while holding the write lock.
    ///
    /// The lock spans the whole read-then-write sequence, so concurrent
    /// requests are serialized.
    ///
    /// # Errors
    ///
    /// Returns the [`ActionError`] from validation; the store is
    /// unchanged in that case.
    pub async fn apply(&self, request: &ActionRequest) -> Result<ActionOutcome, ActionError> {
        let mut store = self.store.write().await;
        todos_core::dispatch(&mut store, request)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
