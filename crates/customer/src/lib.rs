//! # formwork-customer
//!
//! The customer data-entry form built on `formwork-control`: a fixed
//! schema (names, email pair, notification preference, rating, address
//! list), watchers that retune rules as the user edits, debounced email
//! feedback, and display messages.

pub mod customer;
pub mod schema;

pub use customer::{CustomerForm, DEBOUNCE_WINDOW};
pub use schema::{
    AddressType, Notification, RATING_MAX, RATING_MIN, build_address, customer_group,
    default_address_value,
};
