//! Unified error types for tabsheet.
//!
//! Building a sheet never fails; only encoding and delivering it can.
use thiserror::Error;

/// Main error type for tabsheet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A line could not be serialized or written
    #[error("Can't write line {line}: {content}")]
    WriteFailure {
        /// 1-based position of the failing line in the sheet
        line: usize,
        /// The line's cells joined with the delimiter, unescaped
        content: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes outside any single line (the BOM or a buffered payload)
    /// could not be written
    #[error("Can't transmit payload: {0}")]
    Transmit(#[source] std::io::Error),

    /// The sink could not be finalized after all lines were written
    #[error("Can't close sink: {0}")]
    SinkCloseFailure(#[source] std::io::Error),

    /// Encoder configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// 1-based line number for line-level failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::WriteFailure { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for tabsheet operations.
pub type Result<T> = std::result::Result<T, Error>;
