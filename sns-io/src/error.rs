use std::io;
use thiserror::Error;

/// Error type for sns-io operations.
#[derive(Error, Debug)]
pub enum SnsIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Could not open the input file.
    #[error("Can't read file: {0}")]
    FileRead(String),

    /// A record line has fewer columns than the format needs.
    #[error("Line {line}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A coordinate or count could not be parsed.
    #[error("Line {line}: can't parse {column} from '{value}'")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// The fields parse but don't form a valid record.
    #[error("Line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// The file held no records at all.
    #[error("Corrupted file. 0 records found in the file: {0}")]
    Empty(String),
}

/// Result type alias for sns-io operations.
pub type Result<T> = std::result::Result<T, SnsIoError>;
