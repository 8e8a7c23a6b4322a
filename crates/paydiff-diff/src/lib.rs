//! Structural comparison engine for JSON payloads.
//!
//! Walks two JSON values recursively and produces an ordered, flat list of
//! path-addressed differences. Paths use dot notation for object keys and
//! `[i]` for array indices (e.g. `users[1].name`).
//!
//! # Key Types
//!
//! - [`ComparisonResult`] / [`DiffEntry`] / [`DiffKind`] -- the diff output
//! - [`compare()`] -- generic positional deep comparison
//! - [`compare_by_key()`] -- keyed-array variant for id-carrying collections
//!
//! The engine is pure and infallible: owned `serde_json::Value` trees are
//! acyclic by construction, so the only failure mode is stack exhaustion on
//! pathologically deep input, which is not caught.

pub mod compare;
pub mod keyed;

pub use compare::{compare, ComparisonResult, DiffEntry, DiffKind};
pub use keyed::{compare_by_key, summarize_by_category, KindCounts};
