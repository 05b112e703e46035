//! Error types for appconfig-demo

/// Result type for the demo binary
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the demo with a non-zero exit status
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] appconfig::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
