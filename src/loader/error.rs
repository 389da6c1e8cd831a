//! Error types for point loading

use std::fmt;
use std::path::PathBuf;

/// Why a single data row was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RowErrorKind {
    /// Row did not have exactly two fields
    FieldCount { found: usize },
    /// A field could not be parsed as a number
    NotANumber { column: usize, value: String },
    /// A field parsed to NaN or infinity
    NotFinite { column: usize, value: String },
    /// The csv reader itself failed on this record (e.g. invalid UTF-8)
    Record(String),
}

impl fmt::Display for RowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => write!(f, "expected 2 fields, found {}", found),
            Self::NotANumber { column, value } => {
                write!(f, "field {} is not a number: {:?}", column + 1, value)
            }
            Self::NotFinite { column, value } => {
                write!(f, "field {} is not a finite number: {:?}", column + 1, value)
            }
            Self::Record(msg) => write!(f, "{}", msg),
        }
    }
}

/// A rejected data row
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line in the source file
    pub line: u64,
    /// 0-based index among data rows (header excluded)
    pub row: usize,
    pub kind: RowErrorKind,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for RowError {}

/// Errors that abort a load
#[derive(Debug)]
pub enum LoadError {
    /// A malformed row under [`RowPolicy::Abort`](super::RowPolicy::Abort)
    MalformedRow(RowError),
    /// The file exists but could not be opened
    Open { path: PathBuf, source: std::io::Error },
    /// Reading from an opened source failed
    Read(std::io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRow(err) => write!(f, "malformed row at {}", err),
            Self::Open { path, source } => {
                write!(f, "failed to open {}: {}", path.display(), source)
            }
            Self::Read(source) => write!(f, "failed to read CSV data: {}", source),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedRow(err) => Some(err),
            Self::Open { source, .. } => Some(source),
            Self::Read(source) => Some(source),
        }
    }
}

impl From<RowError> for LoadError {
    fn from(err: RowError) -> Self {
        Self::MalformedRow(err)
    }
}
