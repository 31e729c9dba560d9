use std::path::PathBuf;

use thiserror::Error;

/// Classifies input errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// A count line did not hold a non-negative integer
    Malformed,
    /// The stream ended before a required line
    Truncated,
    /// A configuration value was not recognised
    Config,
    /// File open/read failure
    Io,
}

/// Domain checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Malformed input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    #[error("Invalid strategy: {0} (expected sorted|trie)")]
    InvalidStrategy(String),

    #[error("Failed to read domain list '{}': {source}", .path.display())]
    ListFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CheckerError {
    pub fn kind(&self) -> InputErrorKind {
        match self {
            CheckerError::MalformedInput { .. } => InputErrorKind::Malformed,
            CheckerError::UnexpectedEof { .. } => InputErrorKind::Truncated,
            CheckerError::InvalidStrategy(_) => InputErrorKind::Config,
            CheckerError::ListFile { .. } | CheckerError::IoError(_) => InputErrorKind::Io,
        }
    }

    /// 1-based line number of the offending input line, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            CheckerError::MalformedInput { line, .. } | CheckerError::UnexpectedEof { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
