//! Global error handling for airef
//!
//! Only operation-aborting conditions become errors. Per-entry failures
//! (stat, directory read, file read) are reported through the warning
//! sink and never propagate.

use std::io;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for airef operations
#[derive(Error, Debug)]
pub enum AirefError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Workspace root is missing or not a directory
    #[error("Workspace root not found: {0}")]
    WorkspaceNotFound(String),

    /// The caller supplied no files or directories to process
    #[error("No files or folders selected for processing")]
    EmptySelection,

    /// A selection entry is unusable (e.g. an empty path)
    #[error("Invalid selection entry: {0}")]
    InvalidSelection(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Specialized Result type for airef operations
pub type Result<T> = std::result::Result<T, AirefError>;

/// Creates an AirefError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::AirefError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
