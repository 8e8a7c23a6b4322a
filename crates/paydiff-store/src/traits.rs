use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::records::{Slot, StoredComparison, StoredPayload};

/// Key-value persistence over the three payload slots.
///
/// All implementations must satisfy these invariants:
/// - `set` overwrites unconditionally; the latest write wins.
/// - `get` after `set` on the same slot returns the stored value.
/// - `remove` returns whether the slot held a value.
/// - The store never interprets slot contents — records cross the trait
///   boundary as plain JSON values.
pub trait PayloadStore: Send + Sync {
    /// Read the raw value stored in a slot, or `None` if the slot is empty.
    fn get(&self, slot: Slot) -> StoreResult<Option<Value>>;

    /// Store a raw value in a slot, replacing any previous value.
    fn set(&self, slot: Slot, value: Value) -> StoreResult<()>;

    /// Empty a slot. Returns `true` if the slot held a value.
    fn remove(&self, slot: Slot) -> StoreResult<bool>;

    /// Read a payload record from `Slot::Payload1` or `Slot::Payload2`.
    fn get_payload(&self, slot: Slot) -> StoreResult<Option<StoredPayload>> {
        self.get(slot)?.map(decode).transpose()
    }

    /// Store a payload record.
    fn set_payload(&self, slot: Slot, payload: &StoredPayload) -> StoreResult<()> {
        self.set(slot, encode(payload)?)
    }

    /// Read the persisted comparison result, if any.
    fn get_comparison(&self) -> StoreResult<Option<StoredComparison>> {
        self.get(Slot::Comparison)?.map(decode).transpose()
    }

    /// Persist a comparison result.
    fn set_comparison(&self, comparison: &StoredComparison) -> StoreResult<()> {
        self.set(Slot::Comparison, encode(comparison)?)
    }

    /// Empty all three slots.
    fn clear(&self) -> StoreResult<()> {
        for slot in Slot::ALL {
            self.remove(slot)?;
        }
        Ok(())
    }
}

fn encode<T: serde::Serialize>(record: &T) -> StoreResult<Value> {
    serde_json::to_value(record).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> StoreResult<T> {
    serde_json::from_value(value).map_err(|e| StoreError::Serialization(e.to_string()))
}
