//! Shared application state.

use std::sync::Arc;

use itemstore_core::storage::ItemRepository;

/// Shared application state.
///
/// Cloned for each request handler. Holds the one store client created at
/// startup, behind the repository trait so tests can swap in a fake.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::inmemory::InMemoryItemRepository::new()))
    }
}
