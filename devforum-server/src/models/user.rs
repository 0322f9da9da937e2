//! User profile fields: handle, email, experience, visibility

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for handles
const MAX_HANDLE_LEN: usize = 32;

/// Maximum length for email addresses (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// Experience is stored in years
const MAX_EXPERIENCE: i32 = 100;

/// Handle pattern: starts with alphanumeric, allows hyphens/underscores
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("invalid handle regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Validated user handle (the public display name)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    /// Create a new handle.
    ///
    /// # Rules
    /// - 1 to 32 characters
    /// - ASCII alphanumeric, hyphens, underscores
    /// - Must start with alphanumeric
    ///
    /// # Example
    /// ```
    /// use devforum_server::models::Handle;
    ///
    /// assert!(Handle::new("ada_l").is_ok());
    /// assert!(Handle::new("_ada").is_err());
    /// assert!(Handle::new("ada lovelace").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "handle" });
        }

        if s.len() > MAX_HANDLE_LEN {
            return Err(ValidationError::TooLong {
                field: "handle",
                max: MAX_HANDLE_LEN,
            });
        }

        if !HANDLE_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "handle",
                reason: "must be alphanumeric with hyphens/underscores, starting with alphanumeric",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated email address, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email address.
    ///
    /// Only the overall `local@domain.tld` shape is checked; deliverability
    /// is not.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if trimmed.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Years of programming experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Experience(i32);

impl Experience {
    pub fn new(years: i32) -> Result<Self, ValidationError> {
        if !(0..=MAX_EXPERIENCE).contains(&years) {
            return Err(ValidationError::OutOfRange {
                field: "experience",
                min: 0,
                max: MAX_EXPERIENCE as i64,
            });
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> i32 {
        self.0
    }
}

/// Profile visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Visible,
    Hidden,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

impl TryFrom<String> for UserStatus {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            other => Err(ValidationError::InvalidVariant {
                field: "user status",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_handles() {
        assert!(Handle::new("ada").is_ok());
        assert!(Handle::new("Ada-Lovelace").is_ok());
        assert!(Handle::new("dev_42").is_ok());
        assert!(Handle::new("9lives").is_ok());
    }

    #[test]
    fn rejects_bad_handles() {
        assert!(matches!(
            Handle::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            Handle::new("-ada").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            Handle::new("ada@home").unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            Handle::new(&"a".repeat(33)).unwrap_err(),
            ValidationError::TooLong { max: 32, .. }
        ));
    }

    #[test]
    fn email_is_normalized() {
        let email = Email::new("  Ada@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn rejects_bad_emails() {
        assert!(Email::new("").is_err());
        assert!(Email::new("ada").is_err());
        assert!(Email::new("ada@example").is_err());
        assert!(Email::new("ada lovelace@example.com").is_err());
    }

    #[test]
    fn experience_range() {
        assert_eq!(Experience::new(0).unwrap().years(), 0);
        assert_eq!(Experience::new(100).unwrap().years(), 100);
        assert!(Experience::new(-1).is_err());
        assert!(Experience::new(101).is_err());
    }

    #[test]
    fn status_parses() {
        assert_eq!("visible".parse::<UserStatus>().unwrap(), UserStatus::Visible);
        assert_eq!("hidden".parse::<UserStatus>().unwrap(), UserStatus::Hidden);
        assert!("away".parse::<UserStatus>().is_err());
        assert_eq!(UserStatus::default().as_str(), "visible");
    }
}
