//! Input validation failures

/// Why a handle, title, label or other input was refused.
///
/// `field` names the input as the client sent it, so the message can be
/// returned verbatim in a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// `max` is in the unit the field is measured in (chars or bytes)
    #[error("{field} is longer than {max}")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: {reason}")]
    InvalidFormat { field: &'static str, reason: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: i64, max: i64 },

    #[error("unknown {field} '{value}'")]
    InvalidVariant { field: &'static str, value: String },
}
