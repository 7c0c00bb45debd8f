//! Error types for the ASCII decoder.
//!
//! Every decoding stage fails fast with one of these variants. Line numbers
//! are 1-based and refer to the physical line of the input text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding or querying a document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Header line does not match `NAME, [d0][d1]...`.
    #[error("Malformed header at line {line}: {reason}")]
    MalformedHeader {
        /// 1-based line number.
        line: usize,
        /// What did not parse.
        reason: String,
    },

    /// Declared rank is outside 1..=4.
    #[error("Unsupported rank {rank} at line {line} (supported: 1 to 4)")]
    UnsupportedRank {
        /// 1-based line number of the header.
        line: usize,
        /// Number of declared dimensions.
        rank: usize,
    },

    /// A positioned data row could not be parsed or addressed.
    #[error("Malformed data row at line {line}: {reason}")]
    MalformedDataRow {
        /// 1-based line number.
        line: usize,
        /// What did not parse.
        reason: String,
    },

    /// Axis name/values lines are missing or inconsistent.
    #[error("Malformed coordinate block at line {line}: {reason}")]
    MalformedCoordinateBlock {
        /// 1-based line number.
        line: usize,
        /// What did not parse.
        reason: String,
    },

    /// Fewer lines remain than a block requires.
    #[error("Truncated input at line {line}: needed {needed} lines, {available} remain")]
    TruncatedInput {
        /// 1-based line number where the block starts.
        line: usize,
        /// Lines the block requires.
        needed: usize,
        /// Lines left in the input.
        available: usize,
    },

    /// Variable lookup failed.
    #[error("Variable not found: {name}")]
    NotFound {
        /// Requested variable name.
        name: String,
    },

    /// Failed to open or read an input file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Flat buffer did not match the declared shape.
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl DecodeError {
    /// Create a MalformedHeader error.
    pub fn malformed_header(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            line,
            reason: reason.into(),
        }
    }

    /// Create a MalformedDataRow error.
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedDataRow {
            line,
            reason: reason.into(),
        }
    }

    /// Create a MalformedCoordinateBlock error.
    pub fn malformed_coords(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCoordinateBlock {
            line,
            reason: reason.into(),
        }
    }

    /// Create a NotFound error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Line number the error refers to, when the error came from the input text.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedHeader { line, .. }
            | Self::UnsupportedRank { line, .. }
            | Self::MalformedDataRow { line, .. }
            | Self::MalformedCoordinateBlock { line, .. }
            | Self::TruncatedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}
