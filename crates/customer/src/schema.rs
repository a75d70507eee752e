//! Customer form schema: field layout, rules, and choice enums

use formwork_control::{ArrayControl, Control, GroupControl, GroupRule, Rule};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Inclusive bounds for the product rating field.
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// How the customer wants to be notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    #[default]
    Email,
    Text,
}

impl Notification {
    /// The wire form of this choice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "text",
        }
    }
}

/// The kind of address being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
}

impl AddressType {
    /// The wire form of this choice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
        }
    }
}

/// Builds one pristine address entry: home type, everything else empty.
/// No field is constrained.
#[must_use]
pub fn build_address() -> Control {
    Control::Group(
        GroupControl::new()
            .with_field("addressType", json!(AddressType::Home.as_str()), vec![])
            .with_field("streetAddress1", json!(""), vec![])
            .with_field("streetAddress2", json!(""), vec![])
            .with_field("city", json!(""), vec![])
            .with_field("state", json!(""), vec![])
            .with_field("zip", json!(""), vec![]),
    )
}

/// The default value of one address entry, shaped like [`build_address`].
#[must_use]
pub fn default_address_value() -> Value {
    json!({
        "addressType": AddressType::Home.as_str(),
        "streetAddress1": "",
        "streetAddress2": "",
        "city": "",
        "state": "",
        "zip": "",
    })
}

/// Builds the customer form's root group.
///
/// - `firstName`: required, at least 3 characters.
/// - `lastName`: required, numeric max 50. The numeric bound against a
///   name reproduces the production schema as shipped: a surname that
///   does not parse as a number fails with the `max` code.
/// - `emailGroup.email` / `emailGroup.confirmEmail`: required pair,
///   email-shaped, and they must match once both are edited.
/// - `phone`: unconstrained until notification switches to text.
/// - `rating`: optional, in `[1, 5]` when present.
/// - `addressGroup`: starts with exactly one default address.
#[must_use]
pub fn customer_group() -> GroupControl {
    GroupControl::new()
        .with_field(
            "firstName",
            json!(""),
            vec![Rule::Required, Rule::MinLength { length: 3 }],
        )
        .with_field(
            "lastName",
            json!(""),
            vec![Rule::Required, Rule::Max { value: 50.0 }],
        )
        .with_group(
            "emailGroup",
            GroupControl::new()
                .with_field("email", json!(""), vec![Rule::Required, Rule::Email])
                .with_field("confirmEmail", json!(""), vec![Rule::Required])
                .with_rule(GroupRule::FieldsMatch {
                    left: "email".to_string(),
                    right: "confirmEmail".to_string(),
                }),
        )
        .with_field("sendCatalog", json!(true), vec![])
        .with_field("phone", json!(""), vec![])
        .with_field("notification", json!(Notification::Email.as_str()), vec![])
        .with_field(
            "rating",
            Value::Null,
            vec![Rule::Range {
                min: RATING_MIN,
                max: RATING_MAX,
            }],
        )
        .with_array("addressGroup", ArrayControl::new().with_item(build_address()))
}
