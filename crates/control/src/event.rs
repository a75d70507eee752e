//! Control events for reactive updates

use formwork_validator::foundation::ValidationError;
use serde_json::Value;

/// Events emitted by a [`Form`](crate::Form) when its tree changes.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    /// A control value was changed.
    ValueChanged {
        path: String,
        old: Value,
        new: Value,
    },

    /// Validation completed for a control.
    Validated {
        path: String,
        errors: Vec<ValidationError>,
    },

    /// An item was appended to an array control.
    ItemAdded { path: String, index: usize },

    /// All values were replaced (full load).
    Loaded,

    /// All values were reset to their initial state.
    Cleared,
}

impl ControlEvent {
    /// Get the control path if this event is about a specific control.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::ValueChanged { path, .. }
            | Self::Validated { path, .. }
            | Self::ItemAdded { path, .. } => Some(path),
            Self::Loaded | Self::Cleared => None,
        }
    }

    /// Check if this is a value change event.
    #[must_use]
    pub fn is_value_changed(&self) -> bool {
        matches!(self, Self::ValueChanged { .. })
    }

    /// Check if this is a validation event.
    #[must_use]
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Validated { .. })
    }
}
