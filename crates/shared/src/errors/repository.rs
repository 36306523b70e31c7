use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db) => match db.code().as_deref() {
                // unique_violation
                Some("23505") => RepositoryError::AlreadyExists(db.message().to_string()),
                // foreign_key_violation
                Some("23503") => RepositoryError::ForeignKey(db.message().to_string()),
                _ => RepositoryError::Sqlx(err),
            },
            _ => RepositoryError::Sqlx(err),
        }
    }
}
