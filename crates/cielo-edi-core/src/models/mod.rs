//! Configuration and result models.

pub mod config;
pub mod result;

pub use config::{EdiConfig, ExportConfig, ParserConfig};
pub use result::{ProcessingResult, RecordSlice, Statistics, UnparsedLine};
