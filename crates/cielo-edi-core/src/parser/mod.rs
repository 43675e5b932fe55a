//! Whole-file and streaming parsers.

pub mod dispatch;
pub mod lines;
pub mod stream;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{ParserConfig, ProcessingResult};

use self::dispatch::Outcome;
use self::lines::{resolve_encoding, Lines};
pub use self::stream::{RecordStream, StreamItem};

/// Where extract text comes from.
pub enum Source {
    /// File on disk, decoded with the configured encoding.
    Path(PathBuf),
    /// Already-decoded text.
    Text(String),
    /// Raw bytes, decoded with the configured encoding.
    Bytes(Vec<u8>),
    /// Any byte stream, decoded with the configured encoding.
    Reader(Box<dyn Read>),
}

impl Source {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reader(_) => f.write_str("Reader"),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Text(text) => write!(f, "<text, {} bytes>", text.len()),
            Self::Bytes(bytes) => write!(f, "<bytes, {} bytes>", bytes.len()),
            Self::Reader(_) => f.write_str("<reader>"),
        }
    }
}

/// Parser for Cielo EDI extracts.
#[derive(Debug, Clone, Default)]
pub struct EdiParser {
    config: ParserConfig,
}

impl EdiParser {
    /// Create a parser with the default configuration (Latin-1 input).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Override the encoding used for path, byte and reader sources.
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.config.encoding = label.into();
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole source into a [`ProcessingResult`].
    ///
    /// Lines that fail to decode, or carry an unknown tag, are collected in
    /// [`ProcessingResult::unparsed_lines`]. Only I/O and encoding failures
    /// abort the parse.
    pub fn parse(&self, source: Source) -> Result<ProcessingResult> {
        info!(source = %source, "Parsing EDI extract");

        let snippet_chars = self.config.error_snippet_chars;
        let mut result = ProcessingResult::new();

        for numbered in self.lines(source)? {
            let (number, line) = numbered?;
            result.statistics.total_lines += 1;

            match dispatch::dispatch(&line) {
                Outcome::Blank => {}
                Outcome::Decoded(record) => result.push(record),
                Outcome::Unrecognized(tag) => {
                    debug!(line = number, %tag, "Unrecognized record type");
                    result
                        .unparsed_lines
                        .push(dispatch::unparsed(number, &line, None, snippet_chars));
                }
                Outcome::Failed(tag, error) => {
                    warn!(line = number, %tag, %error, "Failed to decode line");
                    result
                        .unparsed_lines
                        .push(dispatch::unparsed(number, &line, Some(&error), snippet_chars));
                }
            }
        }

        info!(
            lines = result.statistics.total_lines,
            records = result.record_count(),
            unparsed = result.unparsed_lines.len(),
            "Finished parsing"
        );
        Ok(result)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ProcessingResult> {
        self.parse(Source::path(path.as_ref()))
    }

    pub fn parse_str(&self, text: &str) -> Result<ProcessingResult> {
        self.parse(Source::Text(text.to_string()))
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ProcessingResult> {
        self.parse(Source::Bytes(bytes.to_vec()))
    }

    pub fn parse_reader(&self, reader: impl Read + 'static) -> Result<ProcessingResult> {
        self.parse(Source::reader(reader))
    }

    /// Iterate over the records of a source without building a result.
    ///
    /// Opening the source and resolving the encoding happen here; everything
    /// else is deferred to iteration.
    pub fn stream(&self, source: Source) -> Result<RecordStream> {
        info!(source = %source, "Streaming EDI extract");
        Ok(RecordStream::new(self.lines(source)?, self.config.error_snippet_chars))
    }

    fn lines(&self, source: Source) -> Result<Lines> {
        let lines = match source {
            Source::Text(text) => {
                Lines::new(Box::new(Cursor::new(text.into_bytes())), encoding_rs::UTF_8)
            }
            Source::Bytes(bytes) => Lines::new(Box::new(Cursor::new(bytes)), self.encoding()?),
            Source::Path(path) => {
                let encoding = self.encoding()?;
                let file = File::open(&path)?;
                Lines::new(Box::new(BufReader::new(file)), encoding)
            }
            Source::Reader(reader) => Lines::new(Box::new(BufReader::new(reader)), self.encoding()?),
        };
        Ok(lines)
    }

    fn encoding(&self) -> Result<&'static encoding_rs::Encoding> {
        resolve_encoding(&self.config.encoding)
    }
}
