//! Payload persistence for paydiff.
//!
//! The comparison service keeps exactly three pieces of state: the two
//! most-recently-submitted payloads and the last comparison result. This
//! crate models that as a key-value store over three logical slots.
//!
//! # Key Types
//!
//! - [`Slot`] -- the three logical keys (`payload1`, `payload2`, `comparison`)
//! - [`StoredPayload`] / [`StoredComparison`] -- timestamped records
//! - [`PayloadStore`] -- the storage trait all backends implement
//! - [`InMemoryPayloadStore`] -- `HashMap`-based backend for serving and tests
//!
//! # Design Rules
//!
//! 1. The store never interprets slot contents -- records are serialized to
//!    plain JSON values at the trait boundary.
//! 2. Concurrent readers are always safe; writers serialize per store.
//! 3. Serialization failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod records;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryPayloadStore;
pub use records::{Slot, StoredComparison, StoredPayload};
pub use traits::PayloadStore;
