use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::StoreResult;
use crate::records::Slot;
use crate::traits::PayloadStore;

/// In-memory, HashMap-based payload store.
///
/// The default backend for serving and tests. Slot values are held behind a
/// `RwLock` for safe concurrent access and cloned on read.
pub struct InMemoryPayloadStore {
    slots: RwLock<HashMap<Slot, Value>>,
}

impl InMemoryPayloadStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryPayloadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadStore for InMemoryPayloadStore {
    fn get(&self, slot: Slot) -> StoreResult<Option<Value>> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots.get(&slot).cloned())
    }

    fn set(&self, slot: Slot, value: Value) -> StoreResult<()> {
        let mut slots = self.slots.write().expect("lock poisoned");
        slots.insert(slot, value);
        tracing::debug!(%slot, "slot written");
        Ok(())
    }

    fn remove(&self, slot: Slot) -> StoreResult<bool> {
        let mut slots = self.slots.write().expect("lock poisoned");
        let existed = slots.remove(&slot).is_some();
        if existed {
            tracing::debug!(%slot, "slot cleared");
        }
        Ok(existed)
    }
}

impl std::fmt::Debug for InMemoryPayloadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPayloadStore")
            .field("populated_slots", &self.len())
            .finish()
    }
}
