//! Error types for table rendering.

use thiserror::Error;

/// Errors that can occur when rendering a table.
///
/// Unlike the tolerant fallbacks used for alignment names, structural
/// problems in the input grid are hard errors: a ragged grid cannot be
/// laid out, and silently truncating or padding it would hide caller
/// bugs. No partial output is produced on error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A row's column count differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for table rendering.
pub type Result<T> = std::result::Result<T, TableError>;
