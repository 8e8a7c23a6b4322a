//! Keyed-array comparison: the legacy product-payload mode, rebuilt as a
//! thin adapter over the generic walker.
//!
//! Collections such as `images` and `variants` carry a stable identifier per
//! element; matching those by position produces cascades of spurious diffs
//! when an element is inserted mid-array. [`compare_by_key`] matches array
//! elements by a caller-chosen key field instead, reusing every emission
//! rule of [`crate::compare()`]. Arrays that do not carry the key fall back to
//! positional comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compare::{walk, ComparisonResult, DiffEntry, DiffKind};

/// Compare two JSON values, matching array elements by `key_field`.
///
/// An array participates in keyed matching only when every element is an
/// object with a unique string or numeric value under `key_field`; the path
/// segment for a matched element is `[<key value>]` rather than the
/// positional index (e.g. `images[26372].url`). Any other array is compared
/// positionally, exactly as [`crate::compare()`] does.
pub fn compare_by_key(left: &Value, right: &Value, key_field: &str) -> ComparisonResult {
    ComparisonResult::from_diffs(walk(left, right, Some(key_field)))
}

/// Per-kind change counts for one category of paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl KindCounts {
    fn record(&mut self, kind: DiffKind) {
        match kind {
            DiffKind::Added => self.added += 1,
            DiffKind::Removed => self.removed += 1,
            DiffKind::Modified => self.modified += 1,
        }
    }
}

/// Count changes per named category of top-level path segments.
///
/// A diff whose first path segment matches one of `categories` is counted
/// under that name; everything else lands in `"other"`. Every named category
/// appears in the output even when empty.
pub fn summarize_by_category(
    diffs: &[DiffEntry],
    categories: &[&str],
) -> BTreeMap<String, KindCounts> {
    let mut summary: BTreeMap<String, KindCounts> = categories
        .iter()
        .map(|c| (c.to_string(), KindCounts::default()))
        .collect();
    summary.insert("other".to_string(), KindCounts::default());

    for diff in diffs {
        let segment = first_segment(&diff.path);
        let bucket = if categories.contains(&segment) {
            segment
        } else {
            "other"
        };
        if let Some(counts) = summary.get_mut(bucket) {
            counts.record(diff.kind);
        }
    }
    summary
}

/// The leading path segment: everything before the first `.` or `[`.
fn first_segment(path: &str) -> &str {
    let end = path.find(['.', '[']).unwrap_or(path.len());
    &path[..end]
}
