//! Fixed-width field extraction and scalar conversion.
//!
//! Column numbers follow the layout manual: 1-indexed, both ends inclusive.
//! A line shorter than a field's nominal end simply yields a shorter (possibly
//! empty) value.

pub mod amounts;
pub mod dates;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::DecodeError;

pub use amounts::{parse_implied_decimal, CURRENCY_SCALE, RATE_SCALE};
pub use dates::{parse_date, parse_time, DateLayout};

/// Extract the trimmed contents of columns `start..=end` from a line.
///
/// Offsets count characters, not bytes, so text decoded from a single-byte
/// encoding keeps the manual's column positions.
pub fn extract(line: &str, start: usize, end: usize) -> &str {
    if start == 0 || end < start {
        return "";
    }

    let from = char_offset(line, start - 1);
    let to = char_offset(line, end);
    line[from..to].trim()
}

/// Byte offset of the `n`-th character, clamped to the line length.
fn char_offset(line: &str, n: usize) -> usize {
    if line.is_ascii() {
        return n.min(line.len());
    }
    line.char_indices().nth(n).map_or(line.len(), |(i, _)| i)
}

/// A single fixed-width line with typed accessors over column ranges.
///
/// Every record decoder is a sequence of calls on this type.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthLine<'a> {
    line: &'a str,
}

impl<'a> FixedWidthLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    /// Raw line.
    pub fn as_str(&self) -> &'a str {
        self.line
    }

    /// Trimmed text field.
    pub fn text(&self, start: usize, end: usize) -> String {
        extract(self.line, start, end).to_string()
    }

    /// Implied-decimal field; the source digits are not kept.
    pub fn decimal(&self, start: usize, end: usize, scale: u32) -> Decimal {
        parse_implied_decimal(extract(self.line, start, end), scale)
    }

    /// Monetary field at [`CURRENCY_SCALE`], returned with its source digits.
    pub fn amount(&self, start: usize, end: usize) -> (Decimal, String) {
        let original = self.text(start, end);
        (parse_implied_decimal(&original, CURRENCY_SCALE), original)
    }

    /// Date field in the given layout.
    pub fn date(&self, start: usize, end: usize, layout: DateLayout) -> Option<NaiveDate> {
        parse_date(extract(self.line, start, end), layout)
    }

    /// Six-digit HHMMSS time field.
    pub fn time(&self, start: usize, end: usize) -> Option<NaiveTime> {
        parse_time(extract(self.line, start, end))
    }

    /// Unsigned integer field. Blank is zero; anything but digits is an error.
    pub fn integer(&self, field: &'static str, start: usize, end: usize) -> Result<u64, DecodeError> {
        let value = extract(self.line, start, end);
        if value.is_empty() {
            return Ok(0);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::InvalidInteger {
                field,
                value: value.to_string(),
            });
        }
        value.parse::<u64>().map_err(|_| DecodeError::InvalidInteger {
            field,
            value: value.to_string(),
        })
    }

    /// Integer field constrained to `0..=max`.
    pub fn bounded(
        &self,
        field: &'static str,
        start: usize,
        end: usize,
        max: u64,
    ) -> Result<u64, DecodeError> {
        let value = self.integer(field, start, end)?;
        if value > max {
            return Err(DecodeError::OutOfRange {
                field,
                value,
                min: 0,
                max,
            });
        }
        Ok(value)
    }
}
