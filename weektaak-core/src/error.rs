//! Error types for weektaak.

use thiserror::Error;

/// Errors that can occur while parsing, rendering or writing a roster.
#[derive(Error, Debug)]
pub enum WeektaakError {
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Row {line} has {found} columns, expected at least {expected}")]
    RowShape {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("Could not decode roster: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("'{person}' has no job in week {week}")]
    Lookup { person: String, week: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WeektaakError {
    /// Whether this error came from reading the input file.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            WeektaakError::Parse { .. } | WeektaakError::RowShape { .. } | WeektaakError::Decode(_)
        )
    }
}

/// Result type alias for weektaak operations.
pub type WeektaakResult<T> = Result<T, WeektaakError>;
