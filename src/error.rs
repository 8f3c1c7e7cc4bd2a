//! Error types for fptmemo
//!
//! Provides a unified error type for all memo file operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using MemoError
pub type Result<T> = std::result::Result<T, MemoError>;

/// Unified error type for memo file operations
#[derive(Debug, Error)]
pub enum MemoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open memo file {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No memo file found for table {}", .0.display())]
    MissingMemoFile(PathBuf),

    #[error("Memo file handle has been closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Invalid memo file format: {0}")]
    Format(String),

    #[error("EOF reached while reading memo at block {index}: expected {expected} bytes, found {found}")]
    Truncated {
        index: i64,
        expected: u32,
        found: u64,
    },

    // -------------------------------------------------------------------------
    // Addressing Errors
    // -------------------------------------------------------------------------
    #[error("Invalid memo block index {index}: {reason}")]
    Addressing { index: i64, reason: String },
}

impl MemoError {
    pub(crate) fn addressing(index: i64, reason: impl Into<String>) -> Self {
        MemoError::Addressing {
            index,
            reason: reason.into(),
        }
    }
}
