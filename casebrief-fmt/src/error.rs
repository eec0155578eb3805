//! Error types for format operations

use thiserror::Error;

/// Errors that can occur while selecting or running an output format.
///
/// The text formatter itself is total; these only surface from the outer
/// layers (format lookup, HTML serialization, page parsing).
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while rendering
    #[error("Render error: {0}")]
    RenderError(String),
    /// Error during HTML serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Reading or writing HTML failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
