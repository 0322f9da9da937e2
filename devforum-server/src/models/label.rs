//! Names and colors for categories, tags, and skills

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for category, tag, and skill names
const MAX_LABEL_LEN: usize = 64;

/// `#rgb` or `#rrggbb`
static COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("invalid color regex")
});

/// Validated label name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelName(String);

impl LabelName {
    /// Create a new label name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 64 characters
    ///
    /// # Example
    /// ```
    /// use devforum_server::models::LabelName;
    ///
    /// assert_eq!(LabelName::new(" rust ").unwrap().as_str(), "rust");
    /// assert!(LabelName::new("  ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if trimmed.chars().count() > MAX_LABEL_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_LABEL_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LabelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hex display color, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "color" });
        }

        if !COLOR_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "color",
                reason: "must be a hex color like #f80 or #ff8800",
            });
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
