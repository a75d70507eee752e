//! String presence and length validators
//!
//! Length is measured in Unicode scalar values (chars), so accented and
//! multi-byte characters count as one.

use crate::foundation::ValidationError;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Reports the `required` code: an empty string is treated as an
    /// absent value, the same way a blank text input is.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    ///
    /// Reports the `minlength` code with `min` and `actual` params.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length(self.min, input.chars().count()) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    ///
    /// Reports the `maxlength` code with `max` and `actual` params.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
