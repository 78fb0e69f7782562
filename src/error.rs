use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Arguments that cannot produce a playable board.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A pattern file could not be opened, read or written.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// A pattern file header line is not a dimension.
    #[error("line {line}: expected a dimension, found {found:?}")]
    Format { line: usize, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
