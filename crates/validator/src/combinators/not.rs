//! NOT combinator - logical negation of a validator

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "Value matched a disallowed condition",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min_length;

    #[test]
    fn inverts_failure() {
        let validator = not(min_length(10));
        assert!(validator.validate("short").is_ok());
    }

    #[test]
    fn inverts_success() {
        let validator = not(min_length(3));
        let err = validator.validate("long enough").unwrap_err();
        assert_eq!(err.code, "not");
    }
}
