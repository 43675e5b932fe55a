//! Line splitting and text decoding for byte sources.

use std::borrow::Cow;
use std::io::BufRead;

use encoding_rs::Encoding;

use crate::error::{EdiError, Result};

/// Resolve an encoding label.
///
/// Accepts WHATWG labels (`utf-8`, `iso-8859-1`, `windows-1252`, ...) and the
/// common spelling `latin-1`. Only ASCII-compatible encodings are allowed, since
/// lines are split on raw `\r`/`\n` bytes before decoding.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .or_else(|| {
            let compact: String = label
                .chars()
                .filter(|c| !matches!(c, '-' | '_' | ' '))
                .collect();
            Encoding::for_label(compact.as_bytes())
        })
        .ok_or_else(|| EdiError::Encoding {
            encoding: label.to_string(),
            reason: "unknown encoding label".to_string(),
        })?;

    if !encoding.is_ascii_compatible() {
        return Err(EdiError::Encoding {
            encoding: label.to_string(),
            reason: "not an ASCII-compatible encoding".to_string(),
        });
    }
    Ok(encoding)
}

/// Numbered, decoded lines from a buffered byte source.
///
/// Accepts `\n`, `\r\n` and bare `\r` terminators. Stops after the first
/// error.
pub struct Lines {
    inner: Box<dyn BufRead>,
    encoding: &'static Encoding,
    line_number: usize,
    /// The previous line ended in `\r`; a following `\n` belongs to it.
    skip_lf: bool,
    finished: bool,
}

impl Lines {
    pub fn new(inner: Box<dyn BufRead>, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            encoding,
            line_number: 0,
            skip_lf: false,
            finished: false,
        }
    }

    /// Lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_raw_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let mut read_any = false;

        loop {
            let available = self.inner.fill_buf()?;
            if available.is_empty() {
                return Ok(read_any.then_some(line));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.inner.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    line.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.inner.consume(end + 1);
                    return Ok(Some(line));
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.inner.consume(len);
                    read_any = true;
                }
            }
        }
    }

    fn decode(&self, raw: &[u8]) -> Result<String> {
        let text: Cow<'_, str> = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(raw)
            .ok_or_else(|| EdiError::Encoding {
                encoding: self.encoding.name().to_string(),
                reason: format!("malformed input on line {}", self.line_number),
            })?;
        Ok(text.into_owned())
    }
}

impl Iterator for Lines {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let raw = match self.read_raw_line() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                self.finished = true;
                return Some(Err(e.into()));
            }
        };

        self.line_number += 1;
        match self.decode(&raw) {
            Ok(text) => Some(Ok((self.line_number, text))),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
