//! Error types for pyexports
//!
//! Every fallible stage of the pipeline returns [`ExportsError`]; the
//! pipeline boundary turns it into an `{"error": ...}` result.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for extraction operations
#[derive(Debug, Error)]
pub enum ExportsError {
    /// Source text is not valid Python
    #[error("{message} (<unknown>, line {line})")]
    Syntax {
        message: String,
        /// 1-based
        line: u32,
        /// 0-based
        column: u32,
    },

    /// Unexpected tree shape while converting or walking the tree
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// IO error (CLI only)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Result could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportsError {
    /// Create a syntax error at a 1-based line and 0-based column
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        ExportsError::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        ExportsError::Extraction(msg.into())
    }
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExportsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display_mentions_line() {
        let err = ExportsError::syntax("invalid syntax", 3, 7);
        assert_eq!(err.to_string(), "invalid syntax (<unknown>, line 3)");
    }

    #[test]
    fn test_io_error_display_is_bare() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err: ExportsError = io.into();
        assert_eq!(err.to_string(), "No such file");
    }
}
