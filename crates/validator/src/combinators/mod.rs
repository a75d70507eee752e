//! Logical combinators for composing validators
//!
//! Combinators wrap one or two validators and implement
//! [`Validate`](crate::foundation::Validate) themselves, so chains of
//! arbitrary depth stay statically dispatched:
//!
//! ```rust,ignore
//! let validator = not_empty().and(min_length(3)).or(exactly("n/a"));
//! ```

pub mod and;
pub mod not;
pub mod optional;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use not::{Not, not};
pub use optional::{Optional, optional};
pub use or::{Or, or};
pub use when::{When, when};
