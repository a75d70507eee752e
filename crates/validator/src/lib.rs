//! # formwork-validator
//!
//! Composable, type-safe validation rules for form fields.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formwork_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .not()
//! let first_name = not_empty().and(min_length(3));
//! assert!(first_name.validate("Jack").is_ok());
//! assert!(first_name.validate("Jo").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **String**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`Email`](validators::Email),
//!   [`MatchesRegex`](validators::MatchesRegex)
//! - **Numeric**: [`AtMost`](validators::AtMost), [`InRange`](validators::InRange)
//! - **Nullable**: [`Required`](validators::Required)
//!
//! Error codes produced by the built-ins (`required`, `minlength`, `max`,
//! `email`, `range`, `match`) are a stable contract: downstream message
//! mapping dispatches on them.

// ValidationError is the fundamental error type for every validator call —
// boxing it would add indirection to each validation for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
