//! Email addresses typed into the site's forms.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("Failed to compile email regex")
});

/// Longest address accepted (RFC 5321 path limit).
const MAX_EMAIL_LENGTH: usize = 254;

/// A visitor's email address, checked once at the form boundary.
///
/// Addresses are trimmed and checked against a practical email grammar at
/// construction time, so anything holding an `EmailAddress` can hand it to the
/// delivery provider as-is.
///
/// # Example
///
/// ```
/// use studio_site_core::domain::EmailAddress;
///
/// let email = EmailAddress::new(" jane@example.com ").unwrap();
/// assert_eq!(email.as_str(), "jane@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an address from raw form input.
    ///
    /// # Errors
    ///
    /// `Required("email")` for blank input, `InvalidEmail` (carrying the raw
    /// input) when the address is too long or malformed.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Required("email"));
        }

        if trimmed.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(trimmed) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Part after the last '@'.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserializing validates, so a JSON form field can be typed as EmailAddress
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        EmailAddress::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
