//! Core error types

use thiserror::Error;

/// Errors surfaced by the engine's ambient edges (input handling and rule
/// profile loading). The segmentation pipeline itself is total and never
/// produces an error.
#[derive(Error, Debug)]
pub enum CoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Rule profile configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown built-in language code
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
