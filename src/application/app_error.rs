use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("This email is already registered.")]
    DuplicateEmail,

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Please verify your email first.")]
    NotVerified,

    #[error("Invalid or expired token")]
    TokenNotFoundOrExpired,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Email delivery failed: {0}")]
    Delivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // The unique index on lower(email) is the storage-level authority on
        // duplicate accounts; any other violation is a generic database failure.
        if let sqlx::Error::Database(db_err) = &e
            && db_err.constraint().is_some_and(is_duplicate_email_constraint)
        {
            return AppError::DuplicateEmail;
        }
        AppError::Database(e.to_string())
    }
}

fn is_duplicate_email_constraint(constraint: &str) -> bool {
    constraint == "users_email_key"
}

pub type AppResult<T> = Result<T, AppError>;
