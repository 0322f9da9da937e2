//! Body text shared by topics and replies

use super::ValidationError;

/// Maximum length for a post body (64KB)
const MAX_BODY_LEN: usize = 65536;

/// Validated post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    /// Create a new post body.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 64KB (65536 bytes)
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "body" });
        }

        if trimmed.len() > MAX_BODY_LEN {
            return Err(ValidationError::TooLong {
                field: "body",
                max: MAX_BODY_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
