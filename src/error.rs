use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Expense not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub(crate) type LedgerResult<T> = Result<T, LedgerError>;
