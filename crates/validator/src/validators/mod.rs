//! Built-in validators
//!
//! Every built-in reports one of the stable error codes that invalid
//! fields carry (`required`, `minlength`, `maxlength`, `max`, `email`,
//! `range`). Compose them with [`ValidateExt`](crate::foundation::ValidateExt)
//! or the [`compose!`](crate::compose) macro.

pub mod content;
pub mod length;
pub mod nullable;
pub mod range;

pub use content::{Email, MatchesRegex, email, matches_regex};
pub use length::{MaxLength, MinLength, NotEmpty, max_length, min_length, not_empty};
pub use nullable::{Required, required};
pub use range::{AtMost, InRange, at_most, in_range};
