//! File header (`0`).

use chrono::NaiveDate;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine};

/// File metadata from the first line of an extract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    record_type: RecordTag,

    /// Establishment (or head office) the extract was generated for.
    pub establishment: String,

    pub processing_date: Option<NaiveDate>,

    /// First day covered by the extract.
    pub period_start: Option<NaiveDate>,

    /// Last day covered by the extract.
    pub period_end: Option<NaiveDate>,

    /// File sequence number, incremented per delivery.
    pub sequence: String,

    /// Always `CIELO`.
    pub acquirer: String,

    /// Extract option, see [`domains::file_kind`].
    pub file_kind: String,

    pub transmission: String,

    /// VAN mailbox the file was delivered to.
    pub mailbox: String,

    pub layout_version: String,
}

impl Header {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        Ok(Self {
            record_type: RecordTag::Header,
            establishment: line.text(2, 11),
            processing_date: line.date(12, 19, DateLayout::YearMonthDay),
            period_start: line.date(20, 27, DateLayout::YearMonthDay),
            period_end: line.date(28, 35, DateLayout::YearMonthDay),
            sequence: line.text(36, 42),
            acquirer: line.text(43, 47),
            file_kind: line.text(48, 49),
            transmission: line.text(50, 50),
            mailbox: line.text(51, 70),
            layout_version: line.text(71, 73),
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn file_kind_description(&self) -> &'static str {
        domains::describe(domains::file_kind, &self.file_kind, domains::UNKNOWN)
    }
}

impl CodeDescriptions for Header {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![("file_kind", self.file_kind_description())]
    }
}
