//! Error types for the bank account front ends
//!
//! The reducer itself never fails: rejected transitions are reported through
//! the state's message fields. These errors only come from reading scripts
//! and writing output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, broken pipe, etc.
//! - **CSV Parsing Errors**: Malformed script rows
//! - **Serialization Errors**: JSON output failures

use thiserror::Error;

/// Main error type for the CLI pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable when raised for a single row: the row is skipped and
    /// processing continues with the next one.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The final state could not be serialized
    #[error("Serialization error: {message}")]
    SerializeError { message: String },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AppError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::SerializeError {
            message: error.to_string(),
        }
    }
}

impl AppError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AppError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        AppError::ParseError {
            line,
            message: message.to_string(),
        }
    }
}
