use std::io;

use thiserror::Error;

/// Library-wide error type for sprig operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Network or HTTP failure while reaching the bundle endpoint.
    #[error("Failed to fetch bundle '{id}': {details}")]
    Fetch { id: String, details: String },

    /// Bundle endpoint returned a body that is not valid bundle JSON.
    #[error("Bundle '{id}' is not valid JSON: {details}")]
    BundleParse { id: String, details: String },

    /// External command exited with a non-zero status.
    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    /// Project directory already exists at the target location.
    #[error("Directory '{0}' already exists")]
    ProjectExists(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
