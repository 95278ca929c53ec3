//! Error types for blockcut-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Span resolution or job validation failed
    #[error(transparent)]
    Span(#[from] blockcut_span::Error),

    /// Reading or writing a document or job file failed
    #[error(transparent)]
    Fs(#[from] blockcut_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
