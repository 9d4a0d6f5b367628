use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all slicesql operations.
///
/// The partitioning algorithm itself is total over well-formed input, so most variants
/// describe either a failure of an external collaborator (I/O, CSV decoding, key discovery)
/// or a caller that handed the algorithm input violating its contract. Contract violations
/// are reported eagerly: no predicate is ever produced from a malformed boundary sequence.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading key exports or writing logs.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Arrow error while decoding a CSV key export.
    ///
    /// Raised by schema inference or batch decoding when the input file is not valid CSV
    /// or a column cannot be parsed as its inferred type.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Invalid user input or API parameter.
    ///
    /// Examples: a slice count of zero, an empty table name, a requested key column
    /// that does not exist in the key export.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// The table has no primary key, so there is no ordering to slice on.
    #[error("primary key not found for table {0}")]
    PrimaryKeyNotFound(String),

    /// A partitioning routine was called with an empty column list.
    #[error("primary key column list is empty")]
    EmptyPrimaryKey,

    /// A boundary tuple does not carry one value per primary-key column.
    #[error("boundary {index} has {actual} values but the primary key has {expected} columns")]
    BoundaryArity {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Boundary `index` sorts after boundary `index + 1`.
    ///
    /// Boundaries must be sampled under `ORDER BY <primary key>`; a descending pair means
    /// the collaborator ordered rows differently from the column list.
    #[error("boundary {index} sorts after boundary {}", .index + 1)]
    UnorderedBoundaries { index: usize },

    /// Boundaries `index` and `index + 1` are the same key but do not close the final slice.
    ///
    /// Such a pair selects no rows; deduplication removes it before partitioning.
    #[error("boundaries {index} and {} are equal but do not form the final slice", .index + 1)]
    EmptyInterval { index: usize },

    /// The table has rows but the collaborator returned no boundary tuples for them.
    #[error("no boundary rows were returned for a table of {total_rows} rows")]
    MissingBoundaries { total_rows: u64 },

    /// Two boundary values in the same column cannot be compared (NULL, or mismatched kinds).
    #[error("boundary {index} has an incomparable value in column {column}")]
    IncomparableBoundary { index: usize, column: String },

    /// Internal error indicating a bug or unexpected state.
    #[error("An internal operation failed: {0}")]
    Internal(String),
}

impl Error {
    /// Create an internal error from any displayable value.
    #[inline]
    pub fn internal<E: fmt::Display>(err: E) -> Self {
        Error::Internal(err.to_string())
    }
}
