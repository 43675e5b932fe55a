//! Exporters for processing results.

pub mod csv;
pub mod json;

pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
