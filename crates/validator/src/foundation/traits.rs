//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Generic over the input type for compile-time safety. All validators
/// return `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use formwork_validator::foundation::{Validate, ValidationError};
///
/// struct MinLength { min: usize }
///
/// impl Validate for MinLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(ValidationError::min_length(self.min, input.chars().count()))
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` input types like `str` and `[T]` where possible so the
    /// validator accepts both owned and borrowed data.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this validator, used in debugging output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type, providing a fluent
/// API for composing validators.
///
/// # Examples
///
/// ```rust,ignore
/// use formwork_validator::prelude::*;
///
/// let validator = not_empty().and(min_length(3)).and(max_length(50));
/// assert!(validator.validate("Jack").is_ok());
/// assert!(validator.validate("Jo").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both must pass; short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// At least one must pass; short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes a validator accept `Option<Input>`, treating `None` as valid.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Makes validation conditional based on a predicate.
    ///
    /// The validator only runs when the condition returns `true`;
    /// otherwise validation is skipped and passes.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::or::Or;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
