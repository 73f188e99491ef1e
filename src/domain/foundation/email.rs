//! Email address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A syntactically plausible email address.
///
/// Only the `local@domain.tld` shape is checked: one `@`, no whitespace,
/// a non-empty local part and a dotted domain. This is not RFC 5322
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses an email address for the given field name.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(field, "must not contain whitespace"));
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| ValidationError::invalid_format(field, "missing @ symbol"))?;

        if local.is_empty() || domain.contains('@') {
            return Err(ValidationError::invalid_format(field, "expected local@domain"));
        }
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(ValidationError::invalid_format(field, "domain must contain a dot"));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        for raw in ["a@acme.com", "first.last@sub.example.org", " buyer@corp.io "] {
            assert!(EmailAddress::parse("email", raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn trims_whitespace() {
        let email = EmailAddress::parse("email", "  a@acme.com ").unwrap();
        assert_eq!(email.as_str(), "a@acme.com");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            EmailAddress::parse("email", "  "),
            Err(ValidationError::empty_field("email"))
        );
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "acme.com",
            "@acme.com",
            "a@",
            "a@acme",
            "a@@acme.com",
            "a@acme.",
            "a b@acme.com",
        ] {
            assert!(EmailAddress::parse("email", raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn error_names_the_field() {
        let err = EmailAddress::parse("contact_email", "nope").unwrap_err();
        assert_eq!(err.field(), "contact_email");
    }
}
