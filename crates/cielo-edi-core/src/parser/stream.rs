//! Record-at-a-time parsing for large files.

use serde::Serialize;
use tracing::{debug, warn};

use super::dispatch::{self, Outcome};
use super::lines::Lines;
use crate::error::Result;
use crate::models::UnparsedLine;
use crate::records::Record;

/// One item of a [`RecordStream`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StreamItem {
    Record(Record),
    /// A line with a known tag that failed to decode.
    Error(UnparsedLine),
}

/// Lazy, forward-only iterator over the records of an extract.
///
/// Blank lines and lines with unrecognized tags are skipped without a trace;
/// only decode failures are reported, as [`StreamItem::Error`]. An I/O or
/// encoding failure is yielded once as `Err` and ends the stream.
pub struct RecordStream {
    lines: Lines,
    snippet_chars: usize,
    records_read: usize,
}

impl RecordStream {
    pub(crate) fn new(lines: Lines, snippet_chars: usize) -> Self {
        Self {
            lines,
            snippet_chars,
            records_read: 0,
        }
    }

    /// Records yielded so far, error markers excluded.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines.line_number()
    }
}

impl Iterator for RecordStream {
    type Item = Result<StreamItem>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (number, line) = match self.lines.next()? {
                Ok(numbered) => numbered,
                Err(e) => return Some(Err(e)),
            };

            match dispatch::dispatch(&line) {
                Outcome::Blank => {}
                Outcome::Unrecognized(tag) => {
                    debug!(line = number, %tag, "Skipping unrecognized record type");
                }
                Outcome::Decoded(record) => {
                    self.records_read += 1;
                    return Some(Ok(StreamItem::Record(record)));
                }
                Outcome::Failed(tag, error) => {
                    warn!(line = number, %tag, %error, "Failed to decode line");
                    let entry = dispatch::unparsed(number, &line, Some(&error), self.snippet_chars);
                    return Some(Ok(StreamItem::Error(entry)));
                }
            }
        }
    }
}
