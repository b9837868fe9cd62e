use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Speech-to-text client errors
#[derive(Debug, Error)]
pub enum SttError {
    /// The audio file could not be opened for reading
    #[error("cannot read audio file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid request parameters
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// The API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}
