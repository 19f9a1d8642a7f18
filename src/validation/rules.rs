//! Validation checks and their fixed error messages
//!
//! Each rule pairs a predicate with the single message shown when it fails.
//! Per-field evaluation is fail-fast: the first failing rule's message wins.

use super::field::{FieldId, FieldValues};
use regex::Regex;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT: &str = "Invalid email. Check the address against RFC 5322";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_CASE: &str =
    "Invalid password. Use at least one lowercase and one uppercase letter";
pub const PASSWORD_DIGIT_SYMBOL: &str =
    "Invalid password. Use at least one digit and one of !@#$%^&*";
pub const PASSWORD_LENGTH: &str = "Invalid password. Use at least 8 characters";
pub const REPEAT_REQUIRED: &str = "Please repeat the password";
pub const REPEAT_MISMATCH: &str = "Passwords do not match";

/// Symbols accepted by the digit-and-symbol password rule
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// RFC-5322-approximating email pattern: dot-atom local part, hostname
/// labels of at most 63 characters, and an alphabetic TLD.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$";

/// A single validation predicate
#[derive(Debug, Clone)]
pub enum Check {
    /// Value must be non-empty
    Required,
    /// Value must match the pattern
    Matches(Regex),
    /// At least one lowercase and one uppercase letter
    MixedCase,
    /// At least one ASCII digit and one of [`PASSWORD_SYMBOLS`]
    DigitAndSymbol,
    /// At least this many characters
    MinLength(usize),
    /// Must equal another field's current value exactly
    EqualsField(FieldId),
}

impl Check {
    /// The sibling field this check reads, if any. Drives the schema's
    /// cross-field dependency map.
    pub fn reads(&self) -> Option<FieldId> {
        match self {
            Check::EqualsField(other) => Some(*other),
            _ => None,
        }
    }

    pub fn passes(&self, value: &str, values: &FieldValues) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::Matches(pattern) => pattern.is_match(value),
            Check::MixedCase => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
            }
            Check::DigitAndSymbol => {
                value.chars().any(|c| c.is_ascii_digit())
                    && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
            }
            Check::MinLength(min) => value.chars().count() >= *min,
            Check::EqualsField(other) => value == values.get(*other),
        }
    }
}

/// A check paired with the message shown when it fails
#[derive(Debug, Clone)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }

    pub fn required(message: &'static str) -> Self {
        Self::new(Check::Required, message)
    }

    /// Pattern rule; the pattern is validated when the schema is built
    pub fn matches(pattern: &str, message: &'static str) -> Result<Self, regex::Error> {
        Ok(Self::new(Check::Matches(Regex::new(pattern)?), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_check() -> Check {
        Check::Matches(Regex::new(EMAIL_PATTERN).unwrap())
    }

    mod email_pattern {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            let values = FieldValues::default();
            assert!(email_check().passes("a@b.com", &values));
            assert!(email_check().passes("user.name+tag@example.co.uk", &values));
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            let values = FieldValues::default();
            assert!(!email_check().passes("not-an-email", &values));
            assert!(!email_check().passes("missing@tld", &values));
            assert!(!email_check().passes("@example.com", &values));
            assert!(!email_check().passes("user@-bad.com", &values));
        }
    }

    mod password_checks {
        use super::*;

        #[test]
        fn test_mixed_case() {
            let values = FieldValues::default();
            assert!(Check::MixedCase.passes("aB", &values));
            assert!(!Check::MixedCase.passes("abcdefgh", &values));
            assert!(!Check::MixedCase.passes("ABCDEFGH", &values));
        }

        #[test]
        fn test_digit_and_symbol_needs_both() {
            let values = FieldValues::default();
            assert!(Check::DigitAndSymbol.passes("a1!", &values));
            assert!(!Check::DigitAndSymbol.passes("a1", &values));
            assert!(!Check::DigitAndSymbol.passes("a!", &values));
        }

        #[test]
        fn test_min_length_counts_chars() {
            let values = FieldValues::default();
            assert!(Check::MinLength(8).passes("Abcdef1!", &values));
            assert!(!Check::MinLength(8).passes("Abc1!", &values));
        }
    }

    mod cross_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_equals_field_reads_sibling() {
            let check = Check::EqualsField(FieldId::Password);
            assert_eq!(check.reads(), Some(FieldId::Password));
            assert_eq!(Check::Required.reads(), None);
        }

        #[test]
        fn test_equals_field_compares_current_value() {
            let mut values = FieldValues::default();
            values.set(FieldId::Password, "Abcdef1!".to_string());
            let check = Check::EqualsField(FieldId::Password);
            assert!(check.passes("Abcdef1!", &values));
            assert!(!check.passes("Abcdef2!", &values));
        }
    }

    #[test]
    fn test_required_rejects_empty_only() {
        let values = FieldValues::default();
        assert!(!Check::Required.passes("", &values));
        assert!(Check::Required.passes(" ", &values));
    }
}
