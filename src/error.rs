//! Errors
//!
//! Custom error types used throughout the `minitrees` crate.
use thiserror::Error;

/// A `Result` alias whose error is [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while reading a table or growing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The table is empty, ragged, or does not match its labels.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The tree builder reached a table holding only the target column.
    /// The stopping rule always fires before this point,
    /// so this variant signals a defect rather than bad data.
    #[error("Recursion reached a table without feature columns.")]
    MalformedRecursion,
    /// Unable to read or write a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unable to serialize or deserialize a tree.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
