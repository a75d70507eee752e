//! # formwork-control
//!
//! A reactive control tree for forms: leaf fields, named groups, and
//! positional arrays, each carrying validation rules and runtime state
//! (dirty, touched, valid). A [`Form`] owns the tree, keeps it validated
//! on every mutation, and broadcasts [`ControlEvent`]s for subscribers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formwork_control::{Form, GroupControl, Rule};
//! use serde_json::json;
//!
//! let mut form = Form::new(
//!     GroupControl::new()
//!         .with_field("name", json!(""), vec![Rule::Required]),
//! );
//! assert!(!form.is_valid());
//!
//! form.set("name", json!("Jack"))?;
//! assert!(form.is_valid());
//! ```
//!
//! Values are dynamic ([`serde_json::Value`]) so one tree type covers
//! strings, booleans, numbers, and nullable fields without a schema
//! type parameter.

pub mod control;
pub mod debounce;
pub mod error;
pub mod event;
pub mod form;
pub mod rule;
pub mod state;

pub use control::{ArrayControl, Control, FieldControl, GroupControl};
pub use debounce::debounce;
pub use error::ControlError;
pub use event::ControlEvent;
pub use form::Form;
pub use rule::{GroupRule, Rule};
pub use state::{ControlFlags, ControlState};
