//! The form root: owns the control tree and broadcasts change events

use formwork_validator::foundation::ValidationError;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::control::{Control, GroupControl};
use crate::error::ControlError;
use crate::event::ControlEvent;
use crate::rule::Rule;
use crate::state::ControlState;

/// Default capacity for the event broadcast channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A form: a root group control plus an event broadcaster.
///
/// Every mutation revalidates the whole tree, so the stored states are
/// always current. Events are broadcast on a `tokio` channel; dropped
/// receivers and lagging subscribers are ignored.
#[derive(Debug)]
pub struct Form {
    root: Control,
    event_tx: broadcast::Sender<ControlEvent>,
}

impl Form {
    /// Creates a form from a root group and validates it once.
    #[must_use]
    pub fn new(root: GroupControl) -> Self {
        Self::with_channel_capacity(root, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a form with a specific event channel capacity.
    #[must_use]
    pub fn with_channel_capacity(root: GroupControl, capacity: usize) -> Self {
        let (event_tx, _) = broadcast::channel(capacity);
        let mut form = Self {
            root: Control::Group(root),
            event_tx,
        };
        form.root.validate_subtree("");
        form
    }

    /// Subscribes to form events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ControlEvent> {
        self.event_tx.subscribe()
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Sets a leaf value as a user edit: marks the field dirty and
    /// touched, revalidates, and emits `ValueChanged` then `Validated`.
    ///
    /// Setting the current value again is a no-op and emits nothing.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), ControlError> {
        let control = self.root.get_mut(path)?;
        let Control::Field(field) = control else {
            return Err(ControlError::NotALeaf {
                path: path.to_string(),
            });
        };
        if field.value == value {
            trace!(path, "value unchanged, skipping");
            return Ok(());
        }

        let old = std::mem::replace(&mut field.value, value.clone());
        field.state.mark_dirty();
        field.state.mark_touched();
        debug!(path, "value changed");

        self.root.validate_subtree("");
        let errors = self.root.get(path)?.state().errors().to_vec();

        let _ = self.event_tx.send(ControlEvent::ValueChanged {
            path: path.to_string(),
            old,
            new: value,
        });
        let _ = self.event_tx.send(ControlEvent::Validated {
            path: path.to_string(),
            errors,
        });
        Ok(())
    }

    /// Applies a partial programmatic update: only the keys present in
    /// `value` change, unknown keys are skipped, and nothing is marked
    /// dirty. Emits `ValueChanged` per changed leaf.
    pub fn patch(&mut self, value: &Value) {
        let mut changes = Vec::new();
        self.root.patch_value("", value, &mut changes);
        if changes.is_empty() {
            return;
        }
        debug!(count = changes.len(), "patched values");
        self.root.validate_subtree("");
        for (path, old, new) in changes {
            let _ = self
                .event_tx
                .send(ControlEvent::ValueChanged { path, old, new });
        }
    }

    /// Replaces every value in the form: the supplied object must match
    /// the schema exactly (every field present, no unknown keys, array
    /// lengths equal). Nothing is marked dirty. Emits `Loaded`.
    pub fn replace(&mut self, value: &Value) -> Result<(), ControlError> {
        self.root.check_replace("", value)?;
        self.root.assign_value(value);
        self.root.validate_subtree("");
        debug!("full value replace");
        let _ = self.event_tx.send(ControlEvent::Loaded);
        Ok(())
    }

    /// Swaps a field's rule set and revalidates immediately. Emits
    /// `Validated` for the field.
    pub fn reset_rules(&mut self, path: &str, rules: Vec<Rule>) -> Result<(), ControlError> {
        {
            let control = self.root.get_mut(path)?;
            let Control::Field(field) = control else {
                return Err(ControlError::NotALeaf {
                    path: path.to_string(),
                });
            };
            field.reset_rules(rules);
        }
        debug!(path, "rule set replaced");

        self.root.validate_subtree("");
        let errors = self.root.get(path)?.state().errors().to_vec();
        let _ = self.event_tx.send(ControlEvent::Validated {
            path: path.to_string(),
            errors,
        });
        Ok(())
    }

    /// Appends an item to the array at `path`, returning its index.
    /// Emits `ItemAdded`.
    pub fn add_item(&mut self, path: &str, item: Control) -> Result<usize, ControlError> {
        let control = self.root.get_mut(path)?;
        let Control::Array(array) = control else {
            return Err(ControlError::InvalidShape {
                path: path.to_string(),
                reason: "not an array".to_string(),
            });
        };
        let index = array.push(item);
        debug!(path, index, "item added");

        self.root.validate_subtree("");
        let _ = self.event_tx.send(ControlEvent::ItemAdded {
            path: path.to_string(),
            index,
        });
        Ok(index)
    }

    /// Removes the item at `index` from the array at `path`; subsequent
    /// indices shift down. Emits `ValueChanged` for the array.
    pub fn remove_item(&mut self, path: &str, index: usize) -> Result<(), ControlError> {
        let old = self.root.get(path)?.value();
        let control = self.root.get_mut(path)?;
        let Control::Array(array) = control else {
            return Err(ControlError::InvalidShape {
                path: path.to_string(),
                reason: "not an array".to_string(),
            });
        };
        array.remove(index).map_err(|_| ControlError::NotFound {
            path: format!("{path}.{index}"),
        })?;
        debug!(path, index, "item removed");

        self.root.validate_subtree("");
        let new = self.root.get(path)?.value();
        let _ = self.event_tx.send(ControlEvent::ValueChanged {
            path: path.to_string(),
            old,
            new,
        });
        Ok(())
    }

    /// Resets every value to its initial state and clears all flags.
    /// Emits `Cleared`.
    pub fn clear(&mut self) {
        self.root.reset();
        self.root.validate_subtree("");
        debug!("form cleared");
        let _ = self.event_tx.send(ControlEvent::Cleared);
    }

    /// Re-runs every rule in the tree, returning all current errors.
    pub fn revalidate(&mut self) -> Vec<ValidationError> {
        trace!("revalidating form");
        self.root.validate_subtree("")
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The control at a dotted path; the empty path is the root.
    pub fn get(&self, path: &str) -> Result<&Control, ControlError> {
        self.root.get(path)
    }

    /// The state of the control at a dotted path.
    pub fn state(&self, path: &str) -> Result<&ControlState, ControlError> {
        Ok(self.root.get(path)?.state())
    }

    /// The whole form value as nested JSON.
    #[must_use]
    pub fn value(&self) -> Value {
        self.root.value()
    }

    /// The value at a dotted path.
    pub fn value_at(&self, path: &str) -> Result<Value, ControlError> {
        Ok(self.root.get(path)?.value())
    }

    /// All current errors, tagged with their field paths.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.root.collect_errors(&mut errors);
        errors
    }

    /// True when every control in the tree is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.root.state().is_valid()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_form() -> Form {
        Form::new(
            GroupControl::new()
                .with_field("name", json!(""), vec![Rule::Required])
                .with_field("note", json!(""), vec![]),
        )
    }

    #[test]
    fn new_form_is_validated() {
        let form = sample_form();
        assert!(!form.is_valid());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors()[0].field.as_deref(), Some("name"));
    }

    #[test]
    fn set_marks_dirty_and_revalidates() {
        let mut form = sample_form();
        form.set("name", json!("Jack")).unwrap();

        assert!(form.is_valid());
        let state = form.state("name").unwrap();
        assert!(state.is_dirty());
        assert!(state.is_touched());
    }

    #[test]
    fn set_same_value_emits_nothing() {
        let mut form = sample_form();
        form.set("name", json!("Jack")).unwrap();

        let mut rx = form.subscribe();
        form.set("name", json!("Jack")).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn set_emits_value_changed_then_validated() {
        let mut form = sample_form();
        let mut rx = form.subscribe();
        form.set("name", json!("Jack")).unwrap();

        let first = rx.try_recv().unwrap();
        assert!(matches!(
            first,
            ControlEvent::ValueChanged { ref path, .. } if path == "name"
        ));
        let second = rx.try_recv().unwrap();
        let ControlEvent::Validated { path, errors } = second else {
            panic!("expected Validated");
        };
        assert_eq!(path, "name");
        assert!(errors.is_empty());
    }

    #[test]
    fn set_rejects_non_leaf_paths() {
        let mut form = Form::new(
            GroupControl::new().with_group("inner", GroupControl::new()),
        );
        let err = form.set("inner", json!(1)).unwrap_err();
        assert_eq!(err.code(), "CTRL_NOT_A_LEAF");
        assert_eq!(
            form.set("missing", json!(1)).unwrap_err().code(),
            "CTRL_NOT_FOUND"
        );
    }

    #[test]
    fn patch_does_not_mark_dirty() {
        let mut form = sample_form();
        form.patch(&json!({ "name": "Jack" }));

        assert_eq!(form.value_at("name").unwrap(), json!("Jack"));
        assert!(form.state("name").unwrap().is_pristine());
    }

    #[test]
    fn replace_is_strict_and_emits_loaded() {
        let mut form = sample_form();
        let mut rx = form.subscribe();

        let err = form.replace(&json!({ "name": "Jack" })).unwrap_err();
        assert_eq!(
            err,
            ControlError::MissingField {
                path: "note".to_string()
            }
        );

        form.replace(&json!({ "name": "Jack", "note": "hi" }))
            .unwrap();
        assert!(matches!(rx.try_recv().unwrap(), ControlEvent::Loaded));
        assert_eq!(form.value_at("name").unwrap(), json!("Jack"));
    }

    #[test]
    fn reset_rules_revalidates_immediately() {
        let mut form = sample_form();
        assert!(form.state("note").unwrap().is_valid());

        form.reset_rules("note", vec![Rule::Required]).unwrap();
        assert!(!form.state("note").unwrap().is_valid());
        assert_eq!(form.state("note").unwrap().errors()[0].code, "required");

        form.reset_rules("note", vec![]).unwrap();
        assert!(form.state("note").unwrap().is_valid());
    }

    #[test]
    fn clear_restores_initial_state_and_emits() {
        let mut form = sample_form();
        form.set("name", json!("Jack")).unwrap();
        let mut rx = form.subscribe();

        form.clear();
        assert!(matches!(rx.try_recv().unwrap(), ControlEvent::Cleared));
        assert_eq!(form.value_at("name").unwrap(), json!(""));
        assert!(form.state("name").unwrap().is_pristine());
        assert!(!form.is_valid()); // required kicks back in
    }
}
