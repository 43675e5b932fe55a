//! Tag-based routing of a line to its decoder.

use crate::error::DecodeError;
use crate::models::UnparsedLine;
use crate::records::{Record, RecordTag};

/// What a single line turned into.
#[derive(Debug)]
pub enum Outcome {
    Blank,
    /// The first character is not a known tag.
    Unrecognized(char),
    Decoded(Record),
    Failed(RecordTag, DecodeError),
}

/// Route `line` to the decoder for its leading tag.
pub fn dispatch(line: &str) -> Outcome {
    let Some(first) = line.chars().next() else {
        return Outcome::Blank;
    };

    match RecordTag::try_from(first) {
        Ok(tag) => match Record::decode(tag, line) {
            Ok(record) => Outcome::Decoded(record),
            Err(error) => Outcome::Failed(tag, error),
        },
        Err(unknown) => Outcome::Unrecognized(unknown),
    }
}

/// Build the unparsed-line entry for a line that produced no record.
pub fn unparsed(
    number: usize,
    line: &str,
    error: Option<&DecodeError>,
    snippet_chars: usize,
) -> UnparsedLine {
    UnparsedLine {
        line: number,
        record_type: line.chars().next().map(String::from).unwrap_or_default(),
        error: error.map(ToString::to_string),
        content: line.chars().take(snippet_chars).collect(),
    }
}
