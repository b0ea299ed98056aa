use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Carries the store's failure reason verbatim so the signup endpoint can
    // report it in the response body.
    #[error("{0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
