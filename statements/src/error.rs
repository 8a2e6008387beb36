use std::io::Error as IoError;
use thiserror::Error;

/// Errors produced while decoding raw statement payloads or writing
/// the export output.
#[derive(Debug, Error)]
pub enum ParseError {
    // wrappers

    /// std::io::Error wrapper
    #[error("io error: {0}")]
    Io(#[from] IoError),
    /// csv::Error wrapper (export writers)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // logical errors

    /// the card payload is missing the expected nested structure,
    /// or a movement is missing a required field / has a wrong type
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    /// a date segment or date object does not name a calendar date
    #[error("unparseable date: {0}")]
    UnparseableDate(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::MalformedPayload(e.to_string())
    }
}
