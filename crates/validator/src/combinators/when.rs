//! WHEN combinator - conditional validation
//!
//! Applies the inner validator only while a predicate over the input holds.
//! Typical use: skip shape checks on empty strings so emptiness is reported
//! by a required rule alone.

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a validator based on a predicate.
///
/// When the condition returns `false`, validation is skipped and passes.
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator from a validator and predicate.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::email;

    #[test]
    fn skipped_when_condition_false() {
        let validator = when(email(), |s: &str| !s.is_empty());
        assert!(validator.validate("").is_ok());
    }

    #[test]
    fn applied_when_condition_true() {
        let validator = when(email(), |s: &str| !s.is_empty());
        assert!(validator.validate("user@example.com").is_ok());
        assert!(validator.validate("not-an-email").is_err());
    }
}
