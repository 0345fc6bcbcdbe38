//! Error handling for the catalog sort utilities

use std::io;
use thiserror::Error;

/// Custom error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },

    #[error("unknown category: {token}")]
    UnknownCategory { token: String },

    #[error("invalid sort range: k = {k} exceeds {len} elements")]
    InvalidRange { k: usize, len: usize },

    #[error("selection index {index} out of range (1..={len})")]
    Selection { index: usize, len: usize },

    #[error("invalid selection line: {line}")]
    InvalidSelection { line: String },
}

impl CatalogError {
    /// Returns the appropriate process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::Io(_) | CatalogError::FileNotFound { .. } => crate::IO_FAILURE,
            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        CatalogError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a malformed record error
    pub fn malformed(reason: impl Into<String>) -> Self {
        CatalogError::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Create an unknown category error
    pub fn unknown_category(token: &str) -> Self {
        CatalogError::UnknownCategory {
            token: token.to_string(),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Context trait for attaching a filename to I/O errors
pub trait FileContext<T> {
    fn with_file_context(self, filename: &str) -> CatalogResult<T>;
}

impl<T> FileContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> CatalogResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => CatalogError::file_not_found(filename),
            _ => CatalogError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
