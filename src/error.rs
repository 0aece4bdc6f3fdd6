//! Error types for citefix operations.
//!
//! The marker scanner itself is total and never fails; errors only
//! arise in the exporters and in the boundary checks around them.

use thiserror::Error;

/// Errors that can occur while validating input or writing an export.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("document is empty")]
    EmptyDocument,

    #[error("text exceeds {max} word limit (current: {count} words)")]
    WordLimit { count: usize, max: usize },

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
