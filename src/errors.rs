use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while deriving or checking an mppass.
#[derive(Debug, Error)]
pub enum MppassError {
    // --- Salt errors ---
    #[error("{} not found. Please ensure it exists.", .0.display())]
    SaltNotFound(PathBuf),

    #[error("Invalid salt file. Expected {expected} characters.")]
    InvalidSaltFormat { expected: usize },

    // --- Credential errors ---
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("mppass does not match for user '{0}'")]
    MppassMismatch(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for mppass results.
pub type Result<T> = std::result::Result<T, MppassError>;
