//! Error type for control tree operations

/// Error type for control tree operations.
///
/// Covers path lookup, shape mismatches during full replace, and
/// rule construction. All variants are non-retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControlError {
    /// No control exists at the given path.
    #[error("control not found: `{path}`")]
    NotFound { path: String },

    /// The control at the path is a group or array, not a leaf field.
    #[error("control `{path}` is not a leaf field")]
    NotALeaf { path: String },

    /// A full replace omitted a field the schema requires.
    #[error("missing field `{path}` in full replace")]
    MissingField { path: String },

    /// A full replace named a field the schema does not have.
    #[error("unknown field `{path}`")]
    UnknownField { path: String },

    /// The supplied value does not match the control's shape.
    #[error("invalid shape at `{path}`: {reason}")]
    InvalidShape { path: String, reason: String },

    /// Range rule bounds are inverted.
    #[error("invalid range bounds: {min} > {max}")]
    InvalidRange { min: f64, max: f64 },
}

impl ControlError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "CTRL_NOT_FOUND",
            Self::NotALeaf { .. } => "CTRL_NOT_A_LEAF",
            Self::MissingField { .. } => "CTRL_MISSING_FIELD",
            Self::UnknownField { .. } => "CTRL_UNKNOWN_FIELD",
            Self::InvalidShape { .. } => "CTRL_INVALID_SHAPE",
            Self::InvalidRange { .. } => "CTRL_INVALID_RANGE",
        }
    }
}
