use thiserror::Error;

use crate::form::SubmitBlocked;

/// Client-side failures of the waitlist flow.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// The form refused to submit (invalid input or wrong state)
    #[error(transparent)]
    Blocked(#[from] SubmitBlocked),

    /// The backend rejected the submission
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
