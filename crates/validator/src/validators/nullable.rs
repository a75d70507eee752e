//! Presence validators for optional values

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that an optional value is present.
    ///
    /// Reports the `required` code when the value is `None`. The inner
    /// value itself is not inspected; chain further validators for that.
    pub Required<T> for Option<T>;
    rule(input) { input.is_some() }
    error(input) { ValidationError::required() }
    fn required();
}
