//! Reactive value-tree store backing one form instance.
//!
//! The whole tree lives in a single signal; widgets observe their own slice
//! through [`FormStore::watch`], which only notifies when the value at that
//! path changes. Validators are registered per path and re-run after every
//! mutation that touches a related path, so an error always reflects the
//! current state of its field.
//!
//! The tree-walking helpers are plain functions over `serde_json::Value` so
//! the storage semantics are testable without a reactive runtime.

use leptos::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use super::types::{FieldPath, PathSegment};

/// Per-field validation closure: `None` means the value is acceptable.
pub type FieldValidator = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Form-state container for one `Form` instance.
///
/// Nested forms (array item display, the staging sub-form) create their own
/// stores, so each instance exclusively owns its value tree; parents only
/// change through the explicit list operations invoked from event handlers.
#[derive(Clone, Copy)]
pub struct FormStore {
    values: RwSignal<Value>,
    errors: RwSignal<HashMap<FieldPath, String>>,
    validators: StoredValue<HashMap<FieldPath, FieldValidator>>,
}

impl FormStore {
    pub fn new(initial: Value) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(HashMap::new()),
            validators: StoredValue::new(HashMap::new()),
        }
    }

    /// Current value at `path`, `Null` when unset. Reactive.
    pub fn value_at(&self, path: &FieldPath) -> Value {
        self.values
            .with(|tree| value_at_path(tree, path).cloned().unwrap_or(Value::Null))
    }

    /// Path-scoped subscription: dependents re-run only when the value at
    /// `path` actually changes, not on every write to the tree.
    pub fn watch(&self, path: &FieldPath) -> Memo<Value> {
        let store = *self;
        let path = path.clone();
        Memo::new(move |_| store.value_at(&path))
    }

    /// Write `value` at `path`, creating intermediate objects and arrays as
    /// the path's segment kinds dictate, then revalidate.
    pub fn set(&self, path: &FieldPath, value: Value) {
        self.values.update(|tree| set_at_path(tree, path, value));
        self.revalidate(path);
    }

    /// Snapshot of the whole tree, without registering a dependency. Used at
    /// submission time.
    pub fn values(&self) -> Value {
        self.values.get_untracked()
    }

    /// Current error bound at `path`, if any. Reactive.
    pub fn error_at(&self, path: &FieldPath) -> Option<String> {
        self.errors.with(|errors| errors.get(path).cloned())
    }

    /// Attach a validator to `path` and run it once, so the error state
    /// reflects the current value from the start.
    pub fn register_validator(&self, path: &FieldPath, validator: FieldValidator) {
        self.validators.update_value(|v| {
            v.insert(path.clone(), validator);
        });
        self.run_validator(path);
    }

    /// Register a list-valued field: coerces a missing value to an empty
    /// array before installing the validator.
    pub fn register_list(&self, path: &FieldPath, validator: FieldValidator) {
        let missing = self
            .values
            .with_untracked(|tree| !matches!(value_at_path(tree, path), Some(Value::Array(_))));
        if missing {
            self.values
                .update(|tree| set_at_path(tree, path, Value::Array(Vec::new())));
        }
        self.register_validator(path, validator);
    }

    /// Append `value` at the end of the list bound at `path`.
    pub fn push(&self, path: &FieldPath, value: Value) {
        let len = self
            .values
            .with_untracked(|tree| list_len(tree, path));
        self.insert_at(path, len, value);
    }

    /// Insert `value` at `index`, clamping to the list's length.
    pub fn insert_at(&self, path: &FieldPath, index: usize, value: Value) {
        self.values.update(|tree| list_insert(tree, path, index, value));
        self.revalidate(path);
    }

    /// Remove the element at `index`; out-of-range indices are a no-op.
    pub fn remove(&self, path: &FieldPath, index: usize) {
        self.values.update(|tree| list_remove(tree, path, index));
        self.revalidate(path);
    }

    /// Move the element at `from` to `to`; out-of-range indices are a no-op.
    pub fn move_item(&self, path: &FieldPath, from: usize, to: usize) {
        self.values.update(|tree| list_move(tree, path, from, to));
        self.revalidate(path);
    }

    /// Swap the elements at `a` and `b`; out-of-range indices are a no-op.
    pub fn swap(&self, path: &FieldPath, a: usize, b: usize) {
        self.values.update(|tree| list_swap(tree, path, a, b));
        self.revalidate(path);
    }

    fn run_validator(&self, path: &FieldPath) {
        let validator = self.validators.with_value(|v| v.get(path).cloned());
        let Some(validator) = validator else { return };

        let value = self
            .values
            .with_untracked(|tree| value_at_path(tree, path).cloned().unwrap_or(Value::Null));
        let outcome = validator(&value);
        let path = path.clone();
        self.errors.update(|errors| {
            match outcome {
                Some(message) => errors.insert(path, message),
                None => errors.remove(&path),
            };
        });
    }

    /// Re-run every validator registered at, above, or below the changed
    /// path. Each validator only writes its own error slot, so the iteration
    /// order is immaterial.
    fn revalidate(&self, changed: &FieldPath) {
        let affected: Vec<FieldPath> = self.validators.with_value(|v| {
            v.keys()
                .filter(|registered| registered.is_related_to(changed))
                .cloned()
                .collect()
        });
        for path in affected {
            self.run_validator(&path);
        }
    }
}

// ============================================================================
// Value-tree helpers
// ============================================================================

/// Borrow the value at `path`, if present.
pub fn value_at_path<'a>(tree: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = match segment {
            PathSegment::Property(name) => current.as_object()?.get(name)?,
            PathSegment::Index(idx) => current.as_array()?.get(*idx)?,
        };
    }
    Some(current)
}

/// Write `value` at `path`, replacing whatever is in the way: a property
/// segment materializes an object, an index segment materializes an array
/// padded with `Null` up to the index.
pub fn set_at_path(tree: &mut Value, path: &FieldPath, value: Value) {
    set_segments(tree, path.segments(), value)
}

fn set_segments(tree: &mut Value, segments: &[PathSegment], value: Value) {
    match segments.split_first() {
        None => *tree = value,
        Some((PathSegment::Property(name), rest)) => {
            if !tree.is_object() {
                *tree = Value::Object(Map::new());
            }
            let map = tree.as_object_mut().unwrap();
            let slot = map.entry(name.clone()).or_insert(Value::Null);
            set_segments(slot, rest, value);
        }
        Some((PathSegment::Index(idx), rest)) => {
            if !tree.is_array() {
                *tree = Value::Array(Vec::new());
            }
            let arr = tree.as_array_mut().unwrap();
            while arr.len() <= *idx {
                arr.push(Value::Null);
            }
            set_segments(&mut arr[*idx], rest, value);
        }
    }
}

fn list_at_mut<'a>(tree: &'a mut Value, path: &FieldPath) -> Option<&'a mut Vec<Value>> {
    let mut current = tree;
    for segment in path.segments() {
        current = match segment {
            PathSegment::Property(name) => current.as_object_mut()?.get_mut(name)?,
            PathSegment::Index(idx) => current.as_array_mut()?.get_mut(*idx)?,
        };
    }
    current.as_array_mut()
}

pub fn list_len(tree: &Value, path: &FieldPath) -> usize {
    value_at_path(tree, path)
        .and_then(|v| v.as_array())
        .map(|items| items.len())
        .unwrap_or(0)
}

pub fn list_insert(tree: &mut Value, path: &FieldPath, index: usize, value: Value) {
    if let Some(items) = list_at_mut(tree, path) {
        let index = index.min(items.len());
        items.insert(index, value);
    }
}

pub fn list_remove(tree: &mut Value, path: &FieldPath, index: usize) {
    if let Some(items) = list_at_mut(tree, path) {
        if index < items.len() {
            items.remove(index);
        }
    }
}

pub fn list_move(tree: &mut Value, path: &FieldPath, from: usize, to: usize) {
    if let Some(items) = list_at_mut(tree, path) {
        if from < items.len() && to < items.len() && from != to {
            let item = items.remove(from);
            items.insert(to, item);
        }
    }
}

pub fn list_swap(tree: &mut Value, path: &FieldPath, a: usize, b: usize) {
    if let Some(items) = list_at_mut(tree, path) {
        if a < items.len() && b < items.len() {
            items.swap(a, b);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jobs_path() -> FieldPath {
        FieldPath::root().push_property("jobs")
    }

    #[test]
    fn test_value_at_path_walks_objects_and_arrays() {
        let tree = json!({ "jobs": [{ "name": "nightly" }] });
        let path = jobs_path().push_index(0).push_property("name");

        assert_eq!(value_at_path(&tree, &path), Some(&json!("nightly")));
        assert_eq!(value_at_path(&tree, &jobs_path().push_index(3)), None);
        assert_eq!(value_at_path(&tree, &FieldPath::root()), Some(&tree));
    }

    #[test]
    fn test_set_at_path_creates_intermediates() {
        let mut tree = json!({});
        let path = jobs_path().push_index(1).push_property("name");
        set_at_path(&mut tree, &path, json!("weekly"));

        assert_eq!(tree, json!({ "jobs": [null, { "name": "weekly" }] }));
    }

    #[test]
    fn test_set_at_path_overwrites_scalars_in_the_way() {
        let mut tree = json!({ "jobs": "oops" });
        set_at_path(&mut tree, &jobs_path().push_index(0), json!("a"));

        assert_eq!(tree, json!({ "jobs": ["a"] }));
    }

    #[test]
    fn test_list_insert_appends_and_clamps() {
        let mut tree = json!({ "jobs": ["a"] });
        list_insert(&mut tree, &jobs_path(), 1, json!("b"));
        list_insert(&mut tree, &jobs_path(), 99, json!("c"));

        assert_eq!(tree, json!({ "jobs": ["a", "b", "c"] }));
        assert_eq!(list_len(&tree, &jobs_path()), 3);
    }

    #[test]
    fn test_list_remove_out_of_range_is_noop() {
        let mut tree = json!({ "jobs": ["a", "b"] });
        list_remove(&mut tree, &jobs_path(), 5);
        assert_eq!(tree, json!({ "jobs": ["a", "b"] }));

        list_remove(&mut tree, &jobs_path(), 0);
        assert_eq!(tree, json!({ "jobs": ["b"] }));
    }

    #[test]
    fn test_swap_adjacent_leaves_rest_unchanged() {
        let mut tree = json!({ "jobs": ["a", "b", "c"] });
        list_swap(&mut tree, &jobs_path(), 0, 1);

        assert_eq!(tree, json!({ "jobs": ["b", "a", "c"] }));
    }

    #[test]
    fn test_swap_out_of_range_is_noop() {
        let mut tree = json!({ "jobs": ["a", "b", "c"] });
        list_swap(&mut tree, &jobs_path(), 2, 3);

        assert_eq!(tree, json!({ "jobs": ["a", "b", "c"] }));
    }

    #[test]
    fn test_move_between_indices() {
        let mut tree = json!({ "jobs": ["a", "b", "c"] });
        list_move(&mut tree, &jobs_path(), 0, 2);

        assert_eq!(tree, json!({ "jobs": ["b", "c", "a"] }));
    }

    #[test]
    fn test_list_ops_on_non_list_are_noops() {
        let mut tree = json!({ "jobs": { "not": "a list" } });
        list_insert(&mut tree, &jobs_path(), 0, json!("a"));
        list_remove(&mut tree, &jobs_path(), 0);
        list_swap(&mut tree, &jobs_path(), 0, 1);

        assert_eq!(tree, json!({ "jobs": { "not": "a list" } }));
    }
}
