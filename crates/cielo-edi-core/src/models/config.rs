//! Configuration for parsing and export.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for cielo-edi.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdiConfig {
    /// Input decoding.
    pub parser: ParserConfig,

    /// JSON and CSV output.
    pub export: ExportConfig,
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Encoding label for byte input (WHATWG labels, plus `latin-1`).
    pub encoding: String,

    /// Characters of a failed line kept in its unparsed-line entry.
    pub error_snippet_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            encoding: "latin-1".to_string(),
            error_snippet_chars: 100,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// JSON indentation in spaces (0 = compact).
    pub json_indent: usize,

    /// Add `<field>_description` keys for coded fields.
    pub include_descriptions: bool,

    pub csv_delimiter: char,

    /// Write a UTF-8 BOM at the start of CSV files.
    pub csv_bom: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            json_indent: 2,
            include_descriptions: true,
            csv_delimiter: ';',
            csv_bom: true,
        }
    }
}

impl EdiConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
