//! Repository error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} already exists ({detail})")]
    Conflict { resource: &'static str, detail: String },

    #[error("invalid reference from {resource} ({detail})")]
    InvalidReference { resource: &'static str, detail: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify a failed INSERT by the constraint it violated.
    ///
    /// Unique violations become `Conflict`, foreign key violations become
    /// `InvalidReference`; anything else stays a storage error.
    pub(crate) fn from_write(err: sqlx::Error, resource: &'static str) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let detail = db_err.constraint().unwrap_or("constraint").to_owned();

            if db_err.is_unique_violation() {
                return Self::Conflict { resource, detail };
            }

            if db_err.is_foreign_key_violation() {
                return Self::InvalidReference { resource, detail };
            }
        }

        Self::Sqlx(err)
    }
}
