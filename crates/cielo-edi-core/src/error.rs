//! Error types for the cielo-edi-core library.

use thiserror::Error;

/// Main error type for the cielo-edi library.
///
/// Only failures that abort a whole parse surface here. A line that fails to
/// decode is recorded in [`ProcessingResult::unparsed_lines`] instead.
///
/// [`ProcessingResult::unparsed_lines`]: crate::models::result::ProcessingResult::unparsed_lines
#[derive(Error, Debug)]
pub enum EdiError {
    /// I/O error while reading the input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text encoding error at the byte-decoding boundary.
    #[error("encoding error ({encoding}): {reason}")]
    Encoding { encoding: String, reason: String },

    /// Record decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Structural errors raised by a record decoder.
///
/// Value-level noise (bad amount digits, impossible dates) never gets here;
/// the scalar converters resolve it to zero or `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An integer field holds something other than digits.
    #[error("invalid integer in {field}: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    /// An integer field is outside its allowed range.
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

/// Errors related to exporting a processing result.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the exported data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the cielo-edi library.
pub type Result<T> = std::result::Result<T, EdiError>;
