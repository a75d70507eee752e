//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Uses a simple but effective regex pattern. Reports the `email` code.
    /// An empty string fails too; pair with a required rule when emptiness
    /// should be reported separately.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_email() }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern", "Value does not match the expected pattern")
            .with_param("pattern", self.pattern.to_string())
    }
    new(pattern: regex::Regex) { Self { pattern } }
    fn matches_regex(pattern: regex::Regex);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn email_accepts_common_forms() {
        let validator = email();
        assert!(validator.validate("user@example.com").is_ok());
        assert!(validator.validate("first.last@sub.example.org").is_ok());
        assert!(validator.validate("user+tag@example.co").is_ok());
    }

    #[test]
    fn email_rejects_malformed() {
        let validator = email();
        for bad in ["", "plainaddress", "@example.com", "user@", "user @example.com"] {
            let err = validator.validate(bad).unwrap_err();
            assert_eq!(err.code, "email", "expected {bad:?} to be invalid");
        }
    }

    #[test]
    fn regex_validator() {
        let validator = matches_regex(regex::Regex::new(r"^\d{5}$").unwrap());
        assert!(validator.validate("12345").is_ok());
        assert_eq!(validator.validate("1234").unwrap_err().code, "pattern");
    }
}
