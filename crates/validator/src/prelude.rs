//! Convenient re-exports for common use
//!
//! ```rust,ignore
//! use formwork_validator::prelude::*;
//!
//! let name = not_empty().and(min_length(3));
//! assert!(name.validate("Jack").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

pub use crate::combinators::{And, Not, Optional, Or, When, and, not, optional, or, when};

pub use crate::validators::{
    AtMost, Email, InRange, MatchesRegex, MaxLength, MinLength, NotEmpty, Required, at_most, email,
    in_range, matches_regex, max_length, min_length, not_empty, required,
};

pub use crate::compose;
