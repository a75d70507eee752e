//! Declarative validation rules for controls
//!
//! Rules are data, not closures, so a control's rule set can be swapped
//! at runtime (the conditionally-required phone field) and serialized as
//! part of a schema. Each rule delegates to a validator from
//! `formwork-validator` and reports that validator's stable error code.

use formwork_validator::foundation::{Validate, ValidationError};
use formwork_validator::validators::{AtMost, InRange, email, max_length, min_length};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ControlError;

// ============================================================================
// FIELD RULES
// ============================================================================

/// A validation rule attached to a single field.
///
/// Absence semantics follow form conventions: shape rules (`MinLength`,
/// `Email`, ...) pass on `Null` and on the empty string so that
/// emptiness is reported by `Required` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// Fails with `required` on `Null` and on the empty string.
    Required,

    /// Fails with `minlength` when a present string is too short.
    MinLength { length: usize },

    /// Fails with `maxlength` when a present string is too long.
    MaxLength { length: usize },

    /// Fails with `max` when a numeric value exceeds the bound.
    ///
    /// A non-empty string is coerced to a number first; a string that
    /// does not parse fails with `max` as well, matching the numeric
    /// coercion the bound applies.
    Max { value: f64 },

    /// Fails with `email` when a non-empty string is not email-shaped.
    Email,

    /// Fails with `range` when a present value is non-numeric or
    /// outside `[min, max]`. `Null` is valid.
    Range { min: f64, max: f64 },
}

impl Rule {
    /// Creates a `Range` rule, rejecting inverted bounds.
    pub fn range(min: f64, max: f64) -> Result<Self, ControlError> {
        if min > max {
            return Err(ControlError::InvalidRange { min, max });
        }
        Ok(Self::Range { min, max })
    }

    /// Evaluates this rule against a value.
    #[must_use]
    pub fn evaluate(&self, value: &Value) -> Option<ValidationError> {
        match self {
            Self::Required => match value {
                Value::Null => Some(ValidationError::required()),
                Value::String(s) if s.is_empty() => Some(ValidationError::required()),
                _ => None,
            },

            Self::MinLength { length } => match value {
                Value::String(s) if !s.is_empty() => min_length(*length).validate(s).err(),
                _ => None,
            },

            Self::MaxLength { length } => match value {
                Value::String(s) if !s.is_empty() => max_length(*length).validate(s).err(),
                _ => None,
            },

            Self::Max { value: max } => match value {
                Value::Null => None,
                Value::Number(n) => {
                    let v = n.as_f64().unwrap_or(f64::NAN);
                    AtMost { max: *max }.validate(&v).err()
                }
                Value::String(s) if s.is_empty() => None,
                Value::String(s) => match s.parse::<f64>() {
                    Ok(v) => AtMost { max: *max }.validate(&v).err(),
                    Err(_) => Some(ValidationError::max_value(*max, s.clone())),
                },
                other => Some(ValidationError::max_value(*max, other.to_string())),
            },

            Self::Email => match value {
                Value::String(s) if !s.is_empty() => email().validate(s).err(),
                _ => None,
            },

            Self::Range { min, max } => match value {
                Value::Null => None,
                Value::Number(n) => {
                    let v = n.as_f64().unwrap_or(f64::NAN);
                    if v.is_nan() {
                        Some(ValidationError::out_of_range(*min, *max, v))
                    } else {
                        InRange {
                            min: *min,
                            max: *max,
                        }
                        .validate(&v)
                        .err()
                    }
                }
                _ => Some(ValidationError::out_of_range(*min, *max, f64::NAN)),
            },
        }
    }
}

// ============================================================================
// GROUP RULES
// ============================================================================

/// A cross-field validation rule attached to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupRule {
    /// Fails with `match` when both named children are dirty and their
    /// values differ. Valid while either child is pristine, so the rule
    /// stays silent until the user has actually filled both fields.
    FieldsMatch { left: String, right: String },
}

impl GroupRule {
    /// Evaluates this rule against a group's children.
    #[must_use]
    pub fn evaluate(&self, children: &[(String, crate::control::Control)]) -> Option<ValidationError> {
        match self {
            Self::FieldsMatch { left, right } => {
                let l = children.iter().find(|(name, _)| name == left)?;
                let r = children.iter().find(|(name, _)| name == right)?;
                if l.1.state().is_pristine() || r.1.state().is_pristine() {
                    return None;
                }
                if l.1.value() == r.1.value() {
                    None
                } else {
                    Some(ValidationError::mismatch(left.clone(), right.clone()))
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_fails_on_null_and_empty_string() {
        assert_eq!(Rule::Required.evaluate(&Value::Null).unwrap().code, "required");
        assert_eq!(Rule::Required.evaluate(&json!("")).unwrap().code, "required");
        assert!(Rule::Required.evaluate(&json!("x")).is_none());
        assert!(Rule::Required.evaluate(&json!(false)).is_none());
        assert!(Rule::Required.evaluate(&json!(0)).is_none());
    }

    #[test]
    fn min_length_skips_absent_values() {
        let rule = Rule::MinLength { length: 3 };
        assert!(rule.evaluate(&Value::Null).is_none());
        assert!(rule.evaluate(&json!("")).is_none());
        assert_eq!(rule.evaluate(&json!("Jo")).unwrap().code, "minlength");
        assert!(rule.evaluate(&json!("Jack")).is_none());
    }

    #[test]
    fn max_coerces_strings_to_numbers() {
        let rule = Rule::Max { value: 50.0 };
        assert!(rule.evaluate(&Value::Null).is_none());
        assert!(rule.evaluate(&json!("")).is_none());
        assert!(rule.evaluate(&json!(50)).is_none());
        assert_eq!(rule.evaluate(&json!(51)).unwrap().code, "max");
        assert!(rule.evaluate(&json!("42")).is_none());
        // a non-numeric string fails the numeric bound
        assert_eq!(rule.evaluate(&json!("Smith")).unwrap().code, "max");
    }

    #[test]
    fn email_skips_empty() {
        assert!(Rule::Email.evaluate(&json!("")).is_none());
        assert!(Rule::Email.evaluate(&Value::Null).is_none());
        assert!(Rule::Email.evaluate(&json!("user@example.com")).is_none());
        assert_eq!(Rule::Email.evaluate(&json!("nope")).unwrap().code, "email");
    }

    #[test]
    fn range_is_null_tolerant() {
        let rule = Rule::range(1.0, 5.0).unwrap();
        assert!(rule.evaluate(&Value::Null).is_none());
        assert!(rule.evaluate(&json!(1)).is_none());
        assert!(rule.evaluate(&json!(5)).is_none());
        assert!(rule.evaluate(&json!(3.5)).is_none());
        assert_eq!(rule.evaluate(&json!(0)).unwrap().code, "range");
        assert_eq!(rule.evaluate(&json!(6)).unwrap().code, "range");
        assert_eq!(rule.evaluate(&json!("three")).unwrap().code, "range");
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        let err = Rule::range(5.0, 1.0).unwrap_err();
        assert_eq!(err.code(), "CTRL_INVALID_RANGE");
    }

    #[test]
    fn rules_round_trip_as_tagged_json() {
        let rule = Rule::MinLength { length: 3 };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json, json!({ "type": "min_length", "length": 3 }));
        assert_eq!(serde_json::from_value::<Rule>(json).unwrap(), rule);
    }
}
