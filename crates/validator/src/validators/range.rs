//! Numeric bound validators

use std::fmt::Display;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// AT MOST
// ============================================================================

crate::validator! {
    /// Validates that a value does not exceed an upper bound.
    ///
    /// Reports the `max` code with `max` and `actual` params.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub AtMost<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::max_value(self.max, *input) }
    fn at_most(max: T);
}

// ============================================================================
// IN RANGE
// ============================================================================

/// Validates that a value is within an inclusive range.
///
/// Reports the `range` code with `min`, `max` and `actual` params.
///
/// # Examples
///
/// ```rust,ignore
/// let rating = InRange::new(1, 5)?;
/// assert!(rating.validate(&3).is_ok());
/// assert!(rating.validate(&9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InRange<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T: PartialOrd + Display + Copy> InRange<T> {
    /// Creates a new inclusive range validator.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, ValidationError> {
        if min > max {
            return Err(
                ValidationError::new("invalid_range", "min must be <= max")
                    .with_param("min", min.to_string())
                    .with_param("max", max.to_string()),
            );
        }
        Ok(Self { min, max })
    }
}

impl<T: PartialOrd + Display + Copy> Validate for InRange<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if *input >= self.min && *input <= self.max {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(self.min, self.max, *input))
        }
    }
}

/// Creates an inclusive range validator.
pub fn in_range<T: PartialOrd + Display + Copy>(min: T, max: T) -> Result<InRange<T>, ValidationError> {
    InRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_boundaries() {
        let validator = at_most(50_i64);
        assert!(validator.validate(&50).is_ok());
        assert!(validator.validate(&0).is_ok());

        let err = validator.validate(&51).unwrap_err();
        assert_eq!(err.code, "max");
        assert_eq!(err.param("max"), Some("50"));
    }

    #[test]
    fn at_most_floats() {
        let validator = at_most(1.5_f64);
        assert!(validator.validate(&1.5).is_ok());
        assert!(validator.validate(&1.6).is_err());
    }

    #[test]
    fn in_range_boundaries() {
        let validator = in_range(1_i64, 5).unwrap();
        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&3).is_ok());
        assert_eq!(validator.validate(&0).unwrap_err().code, "range");
        assert_eq!(validator.validate(&6).unwrap_err().code, "range");
    }

    #[test]
    fn in_range_error_params() {
        let err = in_range(1_i64, 5).unwrap().validate(&9).unwrap_err();
        assert_eq!(err.param("min"), Some("1"));
        assert_eq!(err.param("max"), Some("5"));
        assert_eq!(err.param("actual"), Some("9"));
    }

    #[test]
    fn in_range_rejects_inverted_bounds() {
        let err = InRange::new(5_i64, 1).unwrap_err();
        assert_eq!(err.code, "invalid_range");
    }

    #[test]
    fn in_range_single_point() {
        let validator = InRange::new(3_i64, 3).unwrap();
        assert!(validator.validate(&3).is_ok());
        assert!(validator.validate(&2).is_err());
    }
}
