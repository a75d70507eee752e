//! Control state and flags

use bitflags::bitflags;
use formwork_validator::foundation::ValidationError;

bitflags! {
    /// Flags representing the current state of a control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ControlFlags: u8 {
        /// Value has been modified since creation or the last reset.
        const DIRTY = 0b0000_0001;
        /// User has interacted with this control.
        const TOUCHED = 0b0000_0010;
        /// Control has passed validation.
        const VALID = 0b0000_0100;
        /// Control is enabled. Set at creation; no operation disables a
        /// control yet, and validation does not consult this flag.
        const ENABLED = 0b0000_1000;
    }
}

/// Runtime state of a single control.
#[derive(Debug, Clone)]
pub struct ControlState {
    /// Current state flags.
    flags: ControlFlags,
    /// Validation errors (empty if valid).
    errors: Vec<ValidationError>,
}

impl ControlState {
    /// Create a new control state with default flags.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: ControlFlags::ENABLED,
            errors: Vec::new(),
        }
    }

    /// Get the current flags.
    #[must_use]
    pub fn flags(&self) -> ControlFlags {
        self.flags
    }

    /// Set a flag.
    pub fn set_flag(&mut self, flag: ControlFlags) {
        self.flags.insert(flag);
    }

    /// Clear a flag.
    pub fn clear_flag(&mut self, flag: ControlFlags) {
        self.flags.remove(flag);
    }

    /// Check if a flag is set.
    #[must_use]
    pub fn has_flag(&self, flag: ControlFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Check if the control is dirty.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.has_flag(ControlFlags::DIRTY)
    }

    /// Check if the control is pristine (never modified).
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        !self.is_dirty()
    }

    /// Check if the control was touched.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.has_flag(ControlFlags::TOUCHED)
    }

    /// Check if the control is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.has_flag(ControlFlags::VALID)
    }

    /// Check if the control is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.has_flag(ControlFlags::ENABLED)
    }

    /// Get validation errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Set validation errors and update the VALID flag.
    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        if errors.is_empty() {
            self.flags.insert(ControlFlags::VALID);
        } else {
            self.flags.remove(ControlFlags::VALID);
        }
        self.errors = errors;
    }

    /// Clear validation errors and set the VALID flag.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.flags.insert(ControlFlags::VALID);
    }

    /// Mark as dirty.
    pub fn mark_dirty(&mut self) {
        self.flags.insert(ControlFlags::DIRTY);
    }

    /// Mark as clean (not dirty).
    pub fn mark_clean(&mut self) {
        self.flags.remove(ControlFlags::DIRTY);
    }

    /// Mark as touched.
    pub fn mark_touched(&mut self) {
        self.flags.insert(ControlFlags::TOUCHED);
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
