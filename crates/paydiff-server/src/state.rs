use std::sync::Arc;
use std::time::Instant;

use paydiff_store::{InMemoryPayloadStore, PayloadStore};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The payload store backing the three slots.
    pub store: Arc<dyn PayloadStore>,
    /// Server start time, for the health endpoint's uptime field.
    pub started_at: Instant,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryPayloadStore::new()))
    }

    /// State backed by a caller-provided store.
    pub fn with_store(store: Arc<dyn PayloadStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
