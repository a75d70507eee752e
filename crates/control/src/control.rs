//! The control tree: fields, groups, and arrays
//!
//! A `Control` is either a leaf field holding a JSON value and its rules,
//! a group of named children, or an array of positional items. Controls
//! are addressed by dotted paths (`"emailGroup.email"`,
//! `"addressGroup.0.city"`); numeric segments index arrays.

use formwork_validator::foundation::ValidationError;
use serde_json::{Map, Value};

use crate::error::ControlError;
use crate::rule::{GroupRule, Rule};
use crate::state::{ControlFlags, ControlState};

/// Joins a path prefix and a segment with a dot.
pub(crate) fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

// ============================================================================
// FIELD CONTROL
// ============================================================================

/// A leaf control holding a single value and its validation rules.
#[derive(Debug, Clone)]
pub struct FieldControl {
    pub(crate) value: Value,
    pub(crate) initial: Value,
    pub(crate) state: ControlState,
    pub(crate) rules: Vec<Rule>,
}

impl FieldControl {
    /// Creates a field with an initial value and rule set.
    #[must_use]
    pub fn new(initial: Value, rules: Vec<Rule>) -> Self {
        Self {
            value: initial.clone(),
            initial,
            state: ControlState::new(),
            rules,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Runtime state.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Attached rules.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Replaces the attached rule set. The caller revalidates.
    pub(crate) fn reset_rules(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
    }
}

// ============================================================================
// GROUP CONTROL
// ============================================================================

/// A control holding named children in declaration order, plus optional
/// cross-field rules.
#[derive(Debug, Clone, Default)]
pub struct GroupControl {
    pub(crate) children: Vec<(String, Control)>,
    pub(crate) group_rules: Vec<GroupRule>,
    pub(crate) state: ControlState,
}

impl GroupControl {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a leaf field child.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, initial: Value, rules: Vec<Rule>) -> Self {
        self.children
            .push((name.into(), Control::Field(FieldControl::new(initial, rules))));
        self
    }

    /// Adds a nested group child.
    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, group: GroupControl) -> Self {
        self.children.push((name.into(), Control::Group(group)));
        self
    }

    /// Adds an array child.
    #[must_use]
    pub fn with_array(mut self, name: impl Into<String>, array: ArrayControl) -> Self {
        self.children.push((name.into(), Control::Array(array)));
        self
    }

    /// Adds a cross-field rule.
    #[must_use]
    pub fn with_rule(mut self, rule: GroupRule) -> Self {
        self.group_rules.push(rule);
        self
    }

    /// Looks up a child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Control> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Runtime state.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

// ============================================================================
// ARRAY CONTROL
// ============================================================================

/// A control holding positional items.
#[derive(Debug, Clone, Default)]
pub struct ArrayControl {
    pub(crate) items: Vec<Control>,
    pub(crate) state: ControlState,
}

impl ArrayControl {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item (builder form).
    #[must_use]
    pub fn with_item(mut self, item: Control) -> Self {
        self.items.push(item);
        self
    }

    /// Appends an item, returning its index.
    pub fn push(&mut self, item: Control) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Removes the item at `index`; subsequent indices shift down.
    pub fn remove(&mut self, index: usize) -> Result<Control, ControlError> {
        if index >= self.items.len() {
            return Err(ControlError::NotFound {
                path: index.to_string(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Runtime state.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the array has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// CONTROL
// ============================================================================

/// A node in the control tree.
#[derive(Debug, Clone)]
pub enum Control {
    Field(FieldControl),
    Group(GroupControl),
    Array(ArrayControl),
}

impl Control {
    /// Runtime state of this node.
    #[must_use]
    pub fn state(&self) -> &ControlState {
        match self {
            Self::Field(f) => &f.state,
            Self::Group(g) => &g.state,
            Self::Array(a) => &a.state,
        }
    }

    pub(crate) fn state_mut(&mut self) -> &mut ControlState {
        match self {
            Self::Field(f) => &mut f.state,
            Self::Group(g) => &mut g.state,
            Self::Array(a) => &mut a.state,
        }
    }

    /// Serializes this subtree to a JSON value: leaf value for fields,
    /// object for groups, array for arrays.
    #[must_use]
    pub fn value(&self) -> Value {
        match self {
            Self::Field(f) => f.value.clone(),
            Self::Group(g) => {
                let mut map = Map::new();
                for (name, child) in &g.children {
                    map.insert(name.clone(), child.value());
                }
                Value::Object(map)
            }
            Self::Array(a) => Value::Array(a.items.iter().map(Control::value).collect()),
        }
    }

    fn child(&self, segment: &str) -> Option<&Control> {
        match self {
            Self::Group(g) => g.child(segment),
            Self::Array(a) => segment.parse::<usize>().ok().and_then(|i| a.items.get(i)),
            Self::Field(_) => None,
        }
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Control> {
        match self {
            Self::Group(g) => g.child_mut(segment),
            Self::Array(a) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| a.items.get_mut(i)),
            Self::Field(_) => None,
        }
    }

    /// Navigates to the control at a dotted path. The empty path is self.
    pub fn get(&self, path: &str) -> Result<&Control, ControlError> {
        if path.is_empty() {
            return Ok(self);
        }
        let mut current = self;
        for segment in path.split('.') {
            current = current.child(segment).ok_or_else(|| ControlError::NotFound {
                path: path.to_string(),
            })?;
        }
        Ok(current)
    }

    pub(crate) fn get_mut(&mut self, path: &str) -> Result<&mut Control, ControlError> {
        if path.is_empty() {
            return Ok(self);
        }
        let mut current = self;
        for segment in path.split('.') {
            current = current
                .child_mut(segment)
                .ok_or_else(|| ControlError::NotFound {
                    path: path.to_string(),
                })?;
        }
        Ok(current)
    }

    /// Re-runs every rule in this subtree, updating each node's state.
    /// Returns all errors, tagged with their field paths.
    pub(crate) fn validate_subtree(&mut self, prefix: &str) -> Vec<ValidationError> {
        match self {
            Self::Field(field) => {
                let errors: Vec<ValidationError> = field
                    .rules
                    .iter()
                    .filter_map(|rule| rule.evaluate(&field.value))
                    .map(|error| tag_field(error, prefix))
                    .collect();
                field.state.set_errors(errors.clone());
                errors
            }
            Self::Group(group) => {
                let mut errors = Vec::new();
                let mut children_valid = true;
                for (name, child) in &mut group.children {
                    let child_prefix = join_path(prefix, name);
                    errors.extend(child.validate_subtree(&child_prefix));
                    children_valid &= child.state().is_valid();
                }

                let own: Vec<ValidationError> = group
                    .group_rules
                    .iter()
                    .filter_map(|rule| rule.evaluate(&group.children))
                    .map(|error| tag_field(error, prefix))
                    .collect();
                group.state.set_errors(own.clone());
                if !children_valid {
                    group.state.clear_flag(ControlFlags::VALID);
                }
                errors.extend(own);
                errors
            }
            Self::Array(array) => {
                let mut errors = Vec::new();
                let mut items_valid = true;
                for (index, item) in array.items.iter_mut().enumerate() {
                    let item_prefix = join_path(prefix, &index.to_string());
                    errors.extend(item.validate_subtree(&item_prefix));
                    items_valid &= item.state().is_valid();
                }
                array.state.set_errors(Vec::new());
                if !items_valid {
                    array.state.clear_flag(ControlFlags::VALID);
                }
                errors
            }
        }
    }

    /// Resets values to their initial state and clears all flags.
    pub(crate) fn reset(&mut self) {
        match self {
            Self::Field(field) => {
                field.value = field.initial.clone();
                field.state = ControlState::new();
            }
            Self::Group(group) => {
                for (_, child) in &mut group.children {
                    child.reset();
                }
                group.state = ControlState::new();
            }
            Self::Array(array) => {
                for item in &mut array.items {
                    item.reset();
                }
                array.state = ControlState::new();
            }
        }
    }

    /// Verifies that `value` matches this subtree's exact shape: every
    /// group key present, no unknown keys, array lengths equal.
    pub(crate) fn check_replace(&self, path: &str, value: &Value) -> Result<(), ControlError> {
        match self {
            Self::Field(_) => Ok(()),
            Self::Group(group) => {
                let Value::Object(map) = value else {
                    return Err(ControlError::InvalidShape {
                        path: path.to_string(),
                        reason: "expected an object".to_string(),
                    });
                };
                for key in map.keys() {
                    if group.child(key).is_none() {
                        return Err(ControlError::UnknownField {
                            path: join_path(path, key),
                        });
                    }
                }
                for (name, child) in &group.children {
                    let child_path = join_path(path, name);
                    let child_value = map
                        .get(name)
                        .ok_or_else(|| ControlError::MissingField {
                            path: child_path.clone(),
                        })?;
                    child.check_replace(&child_path, child_value)?;
                }
                Ok(())
            }
            Self::Array(array) => {
                let Value::Array(items) = value else {
                    return Err(ControlError::InvalidShape {
                        path: path.to_string(),
                        reason: "expected an array".to_string(),
                    });
                };
                if items.len() != array.items.len() {
                    return Err(ControlError::InvalidShape {
                        path: path.to_string(),
                        reason: format!(
                            "expected {} items, got {}",
                            array.items.len(),
                            items.len()
                        ),
                    });
                }
                for (index, (item, item_value)) in
                    array.items.iter().zip(items.iter()).enumerate()
                {
                    item.check_replace(&join_path(path, &index.to_string()), item_value)?;
                }
                Ok(())
            }
        }
    }

    /// Assigns `value` across this subtree. Shape must have been checked
    /// with [`check_replace`](Self::check_replace) first.
    pub(crate) fn assign_value(&mut self, value: &Value) {
        match self {
            Self::Field(field) => {
                field.value = value.clone();
            }
            Self::Group(group) => {
                if let Value::Object(map) = value {
                    for (name, child) in &mut group.children {
                        if let Some(child_value) = map.get(name) {
                            child.assign_value(child_value);
                        }
                    }
                }
            }
            Self::Array(array) => {
                if let Value::Array(items) = value {
                    for (item, item_value) in array.items.iter_mut().zip(items.iter()) {
                        item.assign_value(item_value);
                    }
                }
            }
        }
    }

    /// Applies a partial update: only the keys present in `value` change,
    /// unknown keys are skipped. Records changed leaves into `changes`.
    pub(crate) fn patch_value(
        &mut self,
        path: &str,
        value: &Value,
        changes: &mut Vec<(String, Value, Value)>,
    ) {
        match self {
            Self::Field(field) => {
                if field.value != *value {
                    let old = std::mem::replace(&mut field.value, value.clone());
                    changes.push((path.to_string(), old, value.clone()));
                }
            }
            Self::Group(group) => {
                let Value::Object(map) = value else {
                    return;
                };
                for (key, child_value) in map {
                    if let Some(child) = group.child_mut(key) {
                        child.patch_value(&join_path(path, key), child_value, changes);
                    }
                }
            }
            Self::Array(array) => {
                let Value::Array(items) = value else {
                    return;
                };
                for (index, item_value) in items.iter().enumerate() {
                    if let Some(item) = array.items.get_mut(index) {
                        item.patch_value(&join_path(path, &index.to_string()), item_value, changes);
                    }
                }
            }
        }
    }

    /// Collects every stored error in this subtree (post-validation).
    pub(crate) fn collect_errors(&self, into: &mut Vec<ValidationError>) {
        match self {
            Self::Field(field) => into.extend(field.state.errors().iter().cloned()),
            Self::Group(group) => {
                for (_, child) in &group.children {
                    child.collect_errors(into);
                }
                into.extend(group.state.errors().iter().cloned());
            }
            Self::Array(array) => {
                for item in &array.items {
                    item.collect_errors(into);
                }
            }
        }
    }
}

fn tag_field(error: ValidationError, prefix: &str) -> ValidationError {
    if prefix.is_empty() {
        error
    } else {
        error.with_field(prefix.to_string())
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

    fn sample_tree() -> Control {
        Control::Group(
            GroupControl::new()
                .with_field("name", json!(""), vec![Rule::Required])
                .with_group(
                    "pair",
                    GroupControl::new()
                        .with_field("a", json!(""), vec![])
                        .with_field("b", json!(""), vec![])
                        .with_rule(GroupRule::FieldsMatch {
                            left: "a".to_string(),
                            right: "b".to_string(),
                        }),
                )
                .with_array(
                    "list",
                    ArrayControl::new().with_item(Control::Field(FieldControl::new(
                        json!("x"),
                        vec![],
                    ))),
                ),
        )
    }

    #[test]
    fn path_navigation() {
        let tree = sample_tree();
        assert!(tree.get("").is_ok());
        assert!(tree.get("name").is_ok());
        assert!(tree.get("pair.a").is_ok());
        assert!(tree.get("list.0").is_ok());

        let err = tree.get("pair.missing").unwrap_err();
        assert_eq!(err.code(), "CTRL_NOT_FOUND");
        assert!(tree.get("list.1").is_err());
        assert!(tree.get("name.deeper").is_err());
    }

    #[test]
    fn value_serializes_nested_shape() {
        let tree = sample_tree();
        assert_eq!(
            tree.value(),
            json!({
                "name": "",
                "pair": { "a": "", "b": "" },
                "list": ["x"],
            })
        );
    }

    #[test]
    fn validation_tags_paths_and_flags() {
        let mut tree = sample_tree();
        let errors = tree.validate_subtree("");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "required");
        assert_eq!(errors[0].field.as_deref(), Some("name"));

        assert!(!tree.state().is_valid());
        assert!(tree.get("pair").unwrap().state().is_valid());
        assert!(tree.get("list").unwrap().state().is_valid());
    }

    #[test]
    fn fields_match_gated_on_pristine() {
        let mut tree = sample_tree();

        // differing values, but both pristine: no error
        if let Control::Field(f) = tree.get_mut("pair.a").unwrap() {
            f.value = json!("one");
        }
        assert!(tree.validate_subtree("").is_empty());

        // both dirty and differing: match error tagged with the group path
        tree.get_mut("pair.a").unwrap().state_mut().mark_dirty();
        tree.get_mut("pair.b").unwrap().state_mut().mark_dirty();
        let errors = tree.validate_subtree("");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "match");
        assert_eq!(errors[0].field.as_deref(), Some("pair"));

        // both dirty and equal: valid again
        if let Control::Field(f) = tree.get_mut("pair.b").unwrap() {
            f.value = json!("one");
        }
        assert!(tree.validate_subtree("").is_empty());
    }

    #[test]
    fn invalid_child_invalidates_ancestors() {
        let mut tree = sample_tree();
        tree.validate_subtree("");
        assert!(!tree.state().is_valid());
        assert!(tree.get("pair").unwrap().state().is_valid());

        if let Control::Field(f) = tree.get_mut("name").unwrap() {
            f.value = json!("Jack");
        }
        tree.validate_subtree("");
        assert!(tree.state().is_valid());
    }

    #[test]
    fn reset_restores_initial_values_and_flags() {
        let mut tree = sample_tree();
        if let Control::Field(f) = tree.get_mut("name").unwrap() {
            f.value = json!("Jack");
            f.state.mark_dirty();
            f.state.mark_touched();
        }
        tree.reset();

        let name = tree.get("name").unwrap();
        assert_eq!(name.value(), json!(""));
        assert!(name.state().is_pristine());
        assert!(!name.state().is_touched());
    }

    #[test]
    fn array_remove_shifts_down() {
        let mut array = ArrayControl::new()
            .with_item(Control::Field(FieldControl::new(json!("a"), vec![])))
            .with_item(Control::Field(FieldControl::new(json!("b"), vec![])))
            .with_item(Control::Field(FieldControl::new(json!("c"), vec![])));

        let removed = array.remove(1).unwrap();
        assert_eq!(removed.value(), json!("b"));
        assert_eq!(array.len(), 2);
        assert_eq!(array.items[1].value(), json!("c"));

        assert!(array.remove(5).is_err());
    }

    #[test]
    fn check_replace_is_strict() {
        let tree = sample_tree();

        // complete literal passes
        let complete = json!({
            "name": "Jack",
            "pair": { "a": "x", "b": "x" },
            "list": ["y"],
        });
        assert!(tree.check_replace("", &complete).is_ok());

        // missing nested field
        let missing = json!({
            "name": "Jack",
            "pair": { "a": "x" },
            "list": ["y"],
        });
        let err = tree.check_replace("", &missing).unwrap_err();
        assert_eq!(
            err,
            ControlError::MissingField {
                path: "pair.b".to_string()
            }
        );

        // unknown key
        let unknown = json!({
            "name": "Jack",
            "pair": { "a": "x", "b": "x" },
            "list": ["y"],
            "extra": 1,
        });
        assert_eq!(
            tree.check_replace("", &unknown).unwrap_err(),
            ControlError::UnknownField {
                path: "extra".to_string()
            }
        );

        // array length mismatch
        let short = json!({
            "name": "Jack",
            "pair": { "a": "x", "b": "x" },
            "list": [],
        });
        assert!(matches!(
            tree.check_replace("", &short).unwrap_err(),
            ControlError::InvalidShape { .. }
        ));
    }

    #[test]
    fn patch_skips_unknown_keys_and_records_changes() {
        let mut tree = sample_tree();
        let mut changes = Vec::new();
        tree.patch_value(
            "",
            &json!({ "name": "Jack", "bogus": 1, "pair": { "a": "hi" } }),
            &mut changes,
        );

        let paths: Vec<&str> = changes.iter().map(|(p, _, _)| p.as_str()).collect();
        assert_eq!(paths, ["name", "pair.a"]);
        assert_eq!(tree.get("name").unwrap().value(), json!("Jack"));
        assert_eq!(tree.get("pair.b").unwrap().value(), json!(""));
    }
}
