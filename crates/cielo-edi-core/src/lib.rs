//! Core library for Cielo EDI extract processing.
//!
//! This crate provides:
//! - Fixed-width field extraction and implied-decimal/date/time conversion
//! - Decoders for the nine record types of the extract layout (v15)
//! - A whole-file parser with per-line failure isolation and a streaming parser
//! - Code tables for human-readable descriptions
//! - JSON and CSV exporters

pub mod domains;
pub mod error;
pub mod export;
pub mod fields;
pub mod models;
pub mod parser;
pub mod records;

#[cfg(test)]
mod testing;

pub use error::{DecodeError, EdiError, ExportError, Result};
pub use export::{CsvExporter, JsonExporter};
pub use models::{EdiConfig, ProcessingResult, Statistics, UnparsedLine};
pub use parser::{EdiParser, RecordStream, Source, StreamItem};
pub use records::{Record, RecordKind, RecordTag};
