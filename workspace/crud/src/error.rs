use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::{error, warn};

/// Error types for the data-access layer
#[derive(Error, Debug)]
pub enum CrudError {
    /// The requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule would be broken
    #[error("{0}")]
    Conflict(String),

    /// Credentials or token were rejected
    #[error("{0}")]
    Unauthorized(String),

    /// Input is well-formed but inconsistent with stored data
    #[error("{0}")]
    Validation(String),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Error from bcrypt while hashing a password
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Error while signing a token
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl CrudError {
    /// `"<what> not found"`, e.g. `CrudError::not_found("Hotel")`.
    pub fn not_found(what: &str) -> Self {
        CrudError::NotFound(format!("{} not found", what))
    }

    /// True for errors caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CrudError::NotFound(_)
                | CrudError::Conflict(_)
                | CrudError::Unauthorized(_)
                | CrudError::Validation(_)
        )
    }
}

/// Turns a unique-constraint violation into [`CrudError::Conflict`] with
/// `message`; other database errors pass through.
pub(crate) fn conflict_on_unique(err: DbErr, message: &str) -> CrudError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!(%detail, "Unique constraint violated");
            CrudError::Conflict(message.to_string())
        }
        _ => {
            error!(?err, "Database error");
            CrudError::Database(err)
        }
    }
}

/// Type alias for Result with CrudError
pub type Result<T> = std::result::Result<T, CrudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CrudError::not_found("Hotel");
        assert_eq!(err.to_string(), "Hotel not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_database_errors_are_not_client_errors() {
        let err = CrudError::from(DbErr::Custom("boom".to_string()));
        assert!(!err.is_client_error());
        assert!(matches!(
            conflict_on_unique(DbErr::Custom("boom".to_string()), "taken"),
            CrudError::Database(_)
        ));
    }
}
