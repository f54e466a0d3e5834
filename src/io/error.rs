//! Error types for grid construction, indexing, and puzzle loading
//!
//! An exhaustive search that finds no assignment is not an error; see
//! [`crate::algorithm::solver::SolveOutcome::Unsolvable`].

use crate::puzzle::grid::Cell;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolveError {
    /// Row and column criteria do not describe a square, non-empty grid
    MalformedGrid {
        /// Number of row criteria supplied
        rows: usize,
        /// Number of column criteria supplied
        columns: usize,
    },

    /// A requested cell has no eligible entity at all
    ///
    /// Detected while the candidate index is built, before any search begins.
    EmptyCell {
        /// The cell without candidates
        cell: Cell,
    },

    /// Caller-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Puzzle definition could not be decoded
    PuzzleLoad {
        /// Path of the puzzle file
        path: PathBuf,
        /// Underlying decoding error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid { rows, columns } => {
                write!(
                    f,
                    "Malformed grid: {rows} row criteria and {columns} column criteria \
                     (need the same non-zero count)"
                )
            }
            Self::EmptyCell { cell } => {
                write!(f, "Cell {cell} has no eligible players")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PuzzleLoad { path, source } => {
                write!(f, "Failed to load puzzle '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PuzzleLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolveError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into `SolveError::FileSystem` naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SolveError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolveError {
    SolveError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
