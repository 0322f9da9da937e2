//! Topic title validation

use super::ValidationError;

/// Maximum length for topic titles
const MAX_TITLE_LEN: usize = 256;

/// Validated topic title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicTitle(String);

impl TopicTitle {
    /// Create a new topic title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    ///
    /// # Example
    /// ```
    /// use devforum_server::models::TopicTitle;
    ///
    /// assert!(TopicTitle::new("Borrow checker woes").is_ok());
    /// assert!(TopicTitle::new("").is_err());
    /// assert!(TopicTitle::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TopicTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
