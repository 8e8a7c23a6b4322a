//! Stored record shapes and the slot keys they live under.

use chrono::{DateTime, Utc};
use paydiff_diff::ComparisonResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The three logical keys of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The first submitted payload.
    Payload1,
    /// The second submitted payload.
    Payload2,
    /// The result of comparing payload 1 against payload 2.
    Comparison,
}

impl Slot {
    /// All slots, in clearing order.
    pub const ALL: [Slot; 3] = [Slot::Payload1, Slot::Payload2, Slot::Comparison];

    /// The stable storage key for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Payload1 => "payload1",
            Slot::Payload2 => "payload2",
            Slot::Comparison => "comparison",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted payload with its arrival timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPayload {
    /// The payload as submitted.
    pub data: Value,
    /// When the payload was received.
    pub timestamp: DateTime<Utc>,
}

impl StoredPayload {
    /// Wrap a payload with the current time.
    pub fn new(data: Value) -> Self {
        Self {
            data,
            timestamp: Utc::now(),
        }
    }
}

/// A persisted comparison result with the timestamps of its inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredComparison {
    /// The full diff output.
    pub result: ComparisonResult,
    /// When the comparison ran.
    pub timestamp: DateTime<Utc>,
    /// Arrival time of payload 1.
    pub payload1_timestamp: DateTime<Utc>,
    /// Arrival time of payload 2.
    pub payload2_timestamp: DateTime<Utc>,
}
