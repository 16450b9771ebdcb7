use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CamsortError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Enumeration errors
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Directory read error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Date handling
    #[error("Date formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),

    // Configuration errors
    #[error("Argument error: {0}")]
    Argument(String),
}

/// Result type for camsort operations.
pub type Result<T> = std::result::Result<T, CamsortError>;
