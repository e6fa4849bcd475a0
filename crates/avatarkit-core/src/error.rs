//! Error types for Avatarkit

use thiserror::Error;

/// Main error type for Avatarkit operations.
///
/// Resolving a request never fails; these only surface when loading
/// configuration or decoding requests from disk.
#[derive(Error, Debug)]
pub enum AvatarError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (config file or avatar request)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Avatarkit operations
pub type AvatarResult<T> = Result<T, AvatarError>;
