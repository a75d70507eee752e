//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Validators are generic over their input type, giving compile-time
//! guarantees about what they can be applied to:
//!
//! ```rust,ignore
//! use formwork_validator::foundation::{Validate, ValidationError};
//!
//! struct MinLength { min: usize }
//!
//! impl Validate for MinLength {
//!     type Input = str;  // only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! Composition happens through logical combinators with static dispatch:
//!
//! ```rust,ignore
//! let validator = not_empty().and(min_length(3)).and(max_length(50));
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};
