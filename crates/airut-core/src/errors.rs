use std::io;
use std::path::Path;

/// Canonical result type for Airut code
pub type Result<T> = std::result::Result<T, AirutError>;

/// Common error type for Airut operations
#[derive(Debug, thiserror::Error)]
pub enum AirutError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Helper to create an IO error with file path context
pub fn io_error_with_path<P: AsRef<Path>>(error: io::Error, path: P) -> io::Error {
    io::Error::new(
        error.kind(),
        format!("{}: {}", path.as_ref().display(), error),
    )
}
