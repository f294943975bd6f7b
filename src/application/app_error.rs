use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{action}: {message}")]
    Downstream { action: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attach the operation that was underway to a low-level failure.
    pub fn during(self, action: &str) -> Self {
        match self {
            AppError::Internal(message) => AppError::Downstream {
                action: action.to_string(),
                message,
            },
            other => other,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
