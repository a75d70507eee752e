//! OR combinator - logical disjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass. When both fail, the failures are
/// reported together as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let left_err = match self.left.validate(input) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        let right_err = match self.right.validate(input) {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        Err(ValidationError::new("or", "No alternative matched")
            .with_nested(vec![left_err, right_err]))
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{max_length, min_length};

    #[test]
    fn left_passes() {
        let validator = or(min_length(5), max_length(2));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn right_passes() {
        let validator = or(min_length(5), max_length(2));
        assert!(validator.validate("hi").is_ok());
    }

    #[test]
    fn both_fail_reports_nested() {
        let validator = or(min_length(5), max_length(2));
        let err = validator.validate("abc").unwrap_err();
        assert_eq!(err.code, "or");
        assert_eq!(err.nested.len(), 2);
    }
}
