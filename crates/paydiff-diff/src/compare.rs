//! Generic deep comparison of two JSON values.
//!
//! The walker accumulates a dotted/bracketed path while descending both
//! values in lockstep. Object keys are visited in insertion order (left keys
//! first, then keys present only in the right value), so the resulting diff
//! list is deterministic for a given input pair.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// The kind of a single detected difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// The value exists only on the right side.
    Added,
    /// The value exists only on the left side.
    Removed,
    /// The value exists on both sides but differs.
    Modified,
}

/// One detected difference at a specific path.
///
/// `old_value` is present for removed/modified entries, `new_value` for
/// added/modified entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub path: String,
    pub kind: DiffKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl DiffEntry {
    /// An `added` entry: the whole subtree appeared on the right side.
    pub fn added(path: impl Into<String>, new_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Added,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    /// A `removed` entry: the whole subtree disappeared from the left side.
    pub fn removed(path: impl Into<String>, old_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Removed,
            old_value: Some(old_value),
            new_value: None,
        }
    }

    /// A `modified` entry: the value changed in place.
    pub fn modified(path: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            path: path.into(),
            kind: DiffKind::Modified,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// The result of comparing two JSON values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// `true` iff `diffs` is non-empty.
    pub has_changes: bool,
    /// Number of entries in `diffs`.
    pub total_changes: usize,
    /// The detected differences, in discovery order of the walk.
    pub diffs: Vec<DiffEntry>,
}

impl ComparisonResult {
    /// Build a result from a diff list, deriving the aggregate fields.
    pub fn from_diffs(diffs: Vec<DiffEntry>) -> Self {
        Self {
            has_changes: !diffs.is_empty(),
            total_changes: diffs.len(),
            diffs,
        }
    }

    /// Returns `true` if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    /// Number of added entries.
    pub fn additions(&self) -> usize {
        self.count_kind(DiffKind::Added)
    }

    /// Number of removed entries.
    pub fn removals(&self) -> usize {
        self.count_kind(DiffKind::Removed)
    }

    /// Number of modified entries.
    pub fn modifications(&self) -> usize {
        self.count_kind(DiffKind::Modified)
    }

    fn count_kind(&self, kind: DiffKind) -> usize {
        self.diffs.iter().filter(|d| d.kind == kind).count()
    }
}

/// Compare two JSON values and produce a flat, ordered diff list.
///
/// Objects are compared field-by-field over the union of their keys, arrays
/// element-by-element by position. A value appearing opposite `null` (or an
/// absent key) is reported as a single `added`/`removed` entry for the whole
/// subtree. Values of different broad categories (array vs object, container
/// vs primitive) yield one `modified` entry for the whole value. Numbers
/// compare by numeric value under IEEE-754 semantics, so `1` equals `1.0`.
pub fn compare(left: &Value, right: &Value) -> ComparisonResult {
    ComparisonResult::from_diffs(walk(left, right, None))
}

/// Run the walker over a pair of root values.
///
/// `array_key` switches arrays of key-carrying objects from positional to
/// keyed matching (see [`crate::keyed`]).
pub(crate) fn walk(left: &Value, right: &Value, array_key: Option<&str>) -> Vec<DiffEntry> {
    let mut walker = Walker {
        array_key,
        diffs: Vec::new(),
    };
    walker.value(Some(left), Some(right), "");
    walker.diffs
}

struct Walker<'a> {
    array_key: Option<&'a str>,
    diffs: Vec<DiffEntry>,
}

impl Walker<'_> {
    fn value(&mut self, left: Option<&Value>, right: Option<&Value>, path: &str) {
        // JSON null and an absent key are indistinguishable to the engine.
        let left = left.filter(|v| !v.is_null());
        let right = right.filter(|v| !v.is_null());

        match (left, right) {
            (None, None) => {}
            // An added or removed subtree is one entry, never diffed
            // field-by-field against nothing.
            (None, Some(new)) => self.diffs.push(DiffEntry::added(path, new.clone())),
            (Some(old), None) => self.diffs.push(DiffEntry::removed(path, old.clone())),
            (Some(Value::Array(a)), Some(Value::Array(b))) => self.arrays(a, b, path),
            (Some(Value::Object(a)), Some(Value::Object(b))) => self.objects(a, b, path),
            (Some(old), Some(new)) => {
                if !leaf_equal(old, new) {
                    self.diffs
                        .push(DiffEntry::modified(path, old.clone(), new.clone()));
                }
            }
        }
    }

    fn arrays(&mut self, left: &[Value], right: &[Value], path: &str) {
        if let Some(key) = self.array_key {
            if let (Some(left_keyed), Some(right_keyed)) =
                (index_by_key(left, key), index_by_key(right, key))
            {
                self.keyed_arrays(&left_keyed, &right_keyed, path);
                return;
            }
        }
        self.positional_arrays(left, right, path);
    }

    /// Positional comparison: index-by-index over the longer of the two
    /// arrays. A mid-array insertion therefore cascades into positional
    /// modifications; callers wanting identity matching use the keyed mode.
    fn positional_arrays(&mut self, left: &[Value], right: &[Value], path: &str) {
        for i in 0..left.len().max(right.len()) {
            let child = join_index(path, i);
            self.value(left.get(i), right.get(i), &child);
        }
    }

    fn keyed_arrays(&mut self, left: &[(String, &Value)], right: &[(String, &Value)], path: &str) {
        for (tag, left_item) in left {
            let child = format!("{path}[{tag}]");
            let right_item = right
                .iter()
                .find(|(t, _)| t == tag)
                .map(|(_, item)| *item);
            self.value(Some(*left_item), right_item, &child);
        }
        for (tag, right_item) in right {
            if !left.iter().any(|(t, _)| t == tag) {
                let child = format!("{path}[{tag}]");
                self.value(None, Some(*right_item), &child);
            }
        }
    }

    fn objects(&mut self, left: &Map<String, Value>, right: &Map<String, Value>, path: &str) {
        // Key union in discovery order: left keys first, then right-only keys.
        for (key, left_val) in left {
            let child = join_key(path, key);
            self.value(Some(left_val), right.get(key), &child);
        }
        for (key, right_val) in right {
            if !left.contains_key(key) {
                let child = join_key(path, key);
                self.value(None, Some(right_val), &child);
            }
        }
    }
}

/// Index array elements by the scalar value of `key`.
///
/// Returns `None` unless every element is an object carrying a unique
/// string or numeric value under `key`; callers fall back to positional
/// comparison in that case.
fn index_by_key<'v>(items: &'v [Value], key: &str) -> Option<Vec<(String, &'v Value)>> {
    let mut indexed = Vec::with_capacity(items.len());
    for item in items {
        let tag = match item.as_object()?.get(key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if indexed.iter().any(|(t, _)| *t == tag) {
            return None;
        }
        indexed.push((tag, item));
    }
    Some(indexed)
}

/// Strict equality for two non-null values that are not both arrays or both
/// objects. Different broad types are never equal, even when loosely
/// equivalent (`0` vs `false`).
fn leaf_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        _ => false,
    }
}

/// Numeric equality across integer and float representations.
///
/// The float path uses IEEE-754 `==`, so a NaN leaf (were the model able to
/// represent one) would never compare equal to itself.
fn numbers_equal(left: &Number, right: &Number) -> bool {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (left.as_u64(), right.as_u64()) {
        return a == b;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn join_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(result: &ComparisonResult) -> Vec<&str> {
        result.diffs.iter().map(|d| d.path.as_str()).collect()
    }

    // -----------------------------------------------------------------------
    // Identity and aggregates
    // -----------------------------------------------------------------------

    #[test]
    fn identical_values_no_diff() {
        let value = json!({
            "id": 432232523,
            "title": "Syncio T-Shirt",
            "images": [{"id": 26372, "position": 1}],
            "nested": {"deep": [null, true, 1.5]}
        });
        let result = compare(&value, &value);
        assert!(!result.has_changes);
        assert_eq!(result.total_changes, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn empty_containers_no_diff() {
        assert!(compare(&json!({}), &json!({})).is_empty());
        assert!(compare(&json!([]), &json!([])).is_empty());
    }

    #[test]
    fn aggregate_fields_match_diff_list() {
        let result = compare(
            &json!({"keep": true, "modify": "old", "remove": 42}),
            &json!({"keep": true, "modify": "new", "added": [1, 2, 3]}),
        );
        assert_eq!(result.total_changes, result.diffs.len());
        assert_eq!(result.has_changes, !result.diffs.is_empty());
        assert_eq!(result.len(), 3);
        assert_eq!(result.additions(), 1);
        assert_eq!(result.removals(), 1);
        assert_eq!(result.modifications(), 1);
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    #[test]
    fn modified_primitive() {
        let result = compare(&json!({"name": "test", "value": 123}), &json!({"name": "test", "value": 456}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(
            result.diffs[0],
            DiffEntry::modified("value", json!(123), json!(456))
        );
    }

    #[test]
    fn different_types_never_equal() {
        // 0 vs false is a type change, not a loose match.
        let result = compare(&json!({"a": 0}), &json!({"a": false}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::modified("a", json!(0), json!(false)));
    }

    #[test]
    fn integer_and_float_representations_equal() {
        let result = compare(&json!({"n": 1}), &json!({"n": 1.0}));
        assert!(result.is_empty());
    }

    #[test]
    fn float_modification() {
        let result = compare(&json!({"n": 1.5}), &json!({"n": 2.5}));
        assert_eq!(result.modifications(), 1);
    }

    #[test]
    fn large_u64_values_compared_exactly() {
        let a = json!({"n": u64::MAX});
        let b = json!({"n": u64::MAX - 1});
        assert!(compare(&a, &a).is_empty());
        assert_eq!(compare(&a, &b).modifications(), 1);
    }

    #[test]
    fn root_primitives() {
        assert!(compare(&json!(123), &json!(123)).is_empty());
        assert!(compare(&json!("same"), &json!("same")).is_empty());
        assert!(compare(&json!(true), &json!(true)).is_empty());

        let result = compare(&json!("hello"), &json!("world"));
        assert_eq!(result.diffs[0], DiffEntry::modified("", json!("hello"), json!("world")));
    }

    // -----------------------------------------------------------------------
    // Added / removed keys
    // -----------------------------------------------------------------------

    #[test]
    fn added_property() {
        let result = compare(&json!({"a": 1}), &json!({"a": 1, "b": 2}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::added("b", json!(2)));
    }

    #[test]
    fn removed_property() {
        let result = compare(&json!({"a": 1, "b": 2}), &json!({"a": 1}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::removed("b", json!(2)));
    }

    #[test]
    fn added_subtree_is_one_entry() {
        // No field-by-field diff against nothing.
        let result = compare(&json!({}), &json!({"user": {"name": "John", "age": 30}}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(
            result.diffs[0],
            DiffEntry::added("user", json!({"name": "John", "age": 30}))
        );
    }

    // -----------------------------------------------------------------------
    // Null / absence equivalence
    // -----------------------------------------------------------------------

    #[test]
    fn null_and_absent_key_are_equal() {
        assert!(compare(&json!({"a": null}), &json!({})).is_empty());
        assert!(compare(&json!({}), &json!({"a": null})).is_empty());
        assert!(compare(&json!({"a": null}), &json!({"a": null})).is_empty());
    }

    #[test]
    fn null_to_value_is_added() {
        let result = compare(&json!({"value": null}), &json!({"value": "test"}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::added("value", json!("test")));
    }

    #[test]
    fn value_to_null_is_removed() {
        let result = compare(&json!({"value": "test"}), &json!({"value": null}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::removed("value", json!("test")));
    }

    #[test]
    fn null_roots_are_equal() {
        assert!(compare(&json!(null), &json!(null)).is_empty());
    }

    #[test]
    fn null_root_vs_object_is_whole_value_added() {
        let result = compare(&json!(null), &json!({"x": 1}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::added("", json!({"x": 1})));

        let reverse = compare(&json!({"x": 1}), &json!(null));
        assert_eq!(reverse.diffs[0], DiffEntry::removed("", json!({"x": 1})));
    }

    // -----------------------------------------------------------------------
    // Arrays (positional)
    // -----------------------------------------------------------------------

    #[test]
    fn array_element_modified_by_position() {
        let result = compare(&json!([1, 2, 3]), &json!([1, 4, 3]));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::modified("[1]", json!(2), json!(4)));
    }

    #[test]
    fn array_growth_appends_added_entries() {
        let result = compare(&json!([1, 2, 3]), &json!([1, 2, 3, 4, 5]));
        assert_eq!(result.diffs.len(), 2);
        assert_eq!(result.diffs[0], DiffEntry::added("[3]", json!(4)));
        assert_eq!(result.diffs[1], DiffEntry::added("[4]", json!(5)));
    }

    #[test]
    fn array_shrink_appends_removed_entries() {
        let result = compare(&json!([1, 2, 3]), &json!([1]));
        assert_eq!(result.diffs.len(), 2);
        assert_eq!(result.diffs[0], DiffEntry::removed("[1]", json!(2)));
        assert_eq!(result.diffs[1], DiffEntry::removed("[2]", json!(3)));
    }

    #[test]
    fn mid_array_insertion_cascades_positionally() {
        // Deliberate design limitation: no alignment detection.
        let result = compare(&json!([1, 2, 3]), &json!([1, 9, 2, 3]));
        assert_eq!(paths(&result), vec!["[1]", "[2]", "[3]"]);
        assert_eq!(result.modifications(), 2);
        assert_eq!(result.additions(), 1);
    }

    #[test]
    fn null_array_slot_vs_out_of_range_is_equal() {
        assert!(compare(&json!([1]), &json!([1, null])).is_empty());
    }

    // -----------------------------------------------------------------------
    // Container-type mismatch
    // -----------------------------------------------------------------------

    #[test]
    fn array_vs_object_is_single_modified() {
        let result = compare(&json!({"a": [1, 2]}), &json!({"a": {"x": 1}}));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(
            result.diffs[0],
            DiffEntry::modified("a", json!([1, 2]), json!({"x": 1}))
        );
    }

    #[test]
    fn container_vs_primitive_is_single_modified() {
        let result = compare(&json!([1]), &json!(1));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::modified("", json!([1]), json!(1)));
    }

    // -----------------------------------------------------------------------
    // Path construction
    // -----------------------------------------------------------------------

    #[test]
    fn nested_object_path() {
        let result = compare(&json!({"a": {"b": {"c": 1}}}), &json!({"a": {"b": {"c": 2}}}));
        assert_eq!(paths(&result), vec!["a.b.c"]);
    }

    #[test]
    fn array_inside_object_path() {
        let result = compare(&json!({"items": [1, 2, 3]}), &json!({"items": [1, 4, 3]}));
        assert_eq!(paths(&result), vec!["items[1]"]);
    }

    #[test]
    fn object_inside_array_path() {
        let result = compare(
            &json!({"users": [{"name": "John"}]}),
            &json!({"users": [{"name": "Jane"}]}),
        );
        assert_eq!(paths(&result), vec!["users[0].name"]);
    }

    #[test]
    fn mixed_nesting_path() {
        let result = compare(
            &json!({"items": [{"id": 1, "tags": ["tag1", "tag2"]}]}),
            &json!({"items": [{"id": 1, "tags": ["tag1", "tag2", "tag4"]}]}),
        );
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0], DiffEntry::added("items[0].tags[2]", json!("tag4")));
    }

    // -----------------------------------------------------------------------
    // Ordering
    // -----------------------------------------------------------------------

    #[test]
    fn discovery_order_is_left_keys_then_right_only_keys() {
        let result = compare(
            &json!({"b": 1, "a": 2, "z": 3}),
            &json!({"m": 9, "a": 5, "b": 1}),
        );
        // Left insertion order first (b unchanged, a modified, z removed),
        // then right-only keys in right insertion order (m added).
        assert_eq!(paths(&result), vec!["a", "z", "m"]);
        assert_eq!(result.diffs[0].kind, DiffKind::Modified);
        assert_eq!(result.diffs[1].kind, DiffKind::Removed);
        assert_eq!(result.diffs[2].kind, DiffKind::Added);
    }

    #[test]
    fn paths_are_unique() {
        let result = compare(
            &json!({"a": [1, {"x": 2}], "b": "old"}),
            &json!({"a": [2, {"x": 3}], "c": "new"}),
        );
        let mut seen = paths(&result);
        seen.sort();
        let before = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), before);
    }

    // -----------------------------------------------------------------------
    // Scale
    // -----------------------------------------------------------------------

    #[test]
    fn wide_object_single_change() {
        let mut left = Map::new();
        let mut right = Map::new();
        for i in 0..1000 {
            left.insert(format!("prop{i}"), json!(i));
            right.insert(
                format!("prop{i}"),
                if i == 500 { json!("modified") } else { json!(i) },
            );
        }
        let result = compare(&Value::Object(left), &Value::Object(right));
        assert_eq!(result.diffs.len(), 1);
        assert_eq!(result.diffs[0].path, "prop500");
        assert_eq!(result.diffs[0].kind, DiffKind::Modified);
    }

    #[test]
    fn deep_acyclic_structure_completes() {
        let mut left = json!("leaf");
        let mut right = json!("other");
        for _ in 0..500 {
            left = json!({"next": left});
            right = json!({"next": right});
        }
        let result = compare(&left, &right);
        assert_eq!(result.diffs.len(), 1);
        assert!(result.diffs[0].path.ends_with(".next"));
    }

    // -----------------------------------------------------------------------
    // Symmetry
    // -----------------------------------------------------------------------

    #[test]
    fn kinds_mirror_under_argument_swap() {
        let left = json!({"only_left": 1, "both": "a", "arr": [1, 2]});
        let right = json!({"both": "b", "arr": [1], "only_right": 2});

        let forward = compare(&left, &right);
        let reverse = compare(&right, &left);
        assert_eq!(forward.total_changes, reverse.total_changes);
        assert_eq!(forward.additions(), reverse.removals());
        assert_eq!(forward.removals(), reverse.additions());
        assert_eq!(forward.modifications(), reverse.modifications());
    }

    // -----------------------------------------------------------------------
    // Serialization shape
    // -----------------------------------------------------------------------

    #[test]
    fn result_serializes_camel_case() {
        let result = compare(&json!({"a": 1}), &json!({"a": 2, "b": 3}));
        let wire = serde_json::to_value(&result).unwrap();
        assert_eq!(wire["hasChanges"], json!(true));
        assert_eq!(wire["totalChanges"], json!(2));
        assert_eq!(wire["diffs"][0]["kind"], json!("modified"));
        assert_eq!(wire["diffs"][0]["oldValue"], json!(1));
        assert_eq!(wire["diffs"][0]["newValue"], json!(2));
        // Added entries omit oldValue entirely.
        assert!(wire["diffs"][1].get("oldValue").is_none());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = compare(&json!({"a": [1, {"b": null}]}), &json!({"a": [2, {"b": 3}]}));
        let wire = serde_json::to_string(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, result);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_json() -> impl Strategy<Value = Value> {
            let leaf = prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(Value::from),
                "[a-z]{0,8}".prop_map(Value::from),
            ];
            leaf.prop_recursive(4, 32, 6, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
                    prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|pairs| {
                        Value::Object(pairs.into_iter().collect())
                    }),
                ]
            })
        }

        fn flipped(entry: &DiffEntry) -> DiffEntry {
            DiffEntry {
                path: entry.path.clone(),
                kind: match entry.kind {
                    DiffKind::Added => DiffKind::Removed,
                    DiffKind::Removed => DiffKind::Added,
                    DiffKind::Modified => DiffKind::Modified,
                },
                old_value: entry.new_value.clone(),
                new_value: entry.old_value.clone(),
            }
        }

        proptest! {
            #[test]
            fn identity(value in arb_json()) {
                let result = compare(&value, &value);
                prop_assert!(!result.has_changes);
                prop_assert!(result.diffs.is_empty());
            }

            #[test]
            fn aggregate_invariants(left in arb_json(), right in arb_json()) {
                let result = compare(&left, &right);
                prop_assert_eq!(result.total_changes, result.diffs.len());
                prop_assert_eq!(result.has_changes, !result.diffs.is_empty());
            }

            #[test]
            fn symmetry(left in arb_json(), right in arb_json()) {
                let forward = compare(&left, &right);
                let reverse = compare(&right, &left);
                prop_assert_eq!(forward.total_changes, reverse.total_changes);

                // Entry-for-entry mirror: same path, flipped kind, swapped
                // values. Discovery order differs between directions, so
                // compare path-sorted.
                let mut expected: Vec<DiffEntry> = forward.diffs.iter().map(flipped).collect();
                let mut actual = reverse.diffs.clone();
                expected.sort_by(|a, b| a.path.cmp(&b.path));
                actual.sort_by(|a, b| a.path.cmp(&b.path));
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
