//! File trailer (`9`).

use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::error::DecodeError;
use crate::fields::FixedWidthLine;

/// Record counts and grand totals as declared by the acquirer.
///
/// These are carried through as-is; nothing checks them against the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trailer {
    record_type: RecordTag,

    /// All records in the file, header and trailer included.
    pub total_records: u64,

    pub net_total_sign: String,
    pub net_total: Decimal,
    pub net_total_original: String,

    pub transaction_count: u64,

    pub gross_total_sign: String,
    pub gross_total: Decimal,
    pub gross_total_original: String,

    /// Net amount assigned to third parties.
    pub assigned_net_sign: String,
    pub assigned_net: Decimal,
    pub assigned_net_original: String,

    /// Net amount under lien.
    pub lien_net_sign: String,
    pub lien_net: Decimal,
    pub lien_net_original: String,
}

impl Trailer {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let (net_total, net_total_original) = line.amount(14, 30);
        let (gross_total, gross_total_original) = line.amount(43, 59);
        let (assigned_net, assigned_net_original) = line.amount(61, 77);
        let (lien_net, lien_net_original) = line.amount(79, 95);

        Ok(Self {
            record_type: RecordTag::Trailer,
            total_records: line.integer("total_records", 2, 12)?,
            net_total_sign: line.text(13, 13),
            net_total,
            net_total_original,
            transaction_count: line.integer("transaction_count", 31, 41)?,
            gross_total_sign: line.text(42, 42),
            gross_total,
            gross_total_original,
            assigned_net_sign: line.text(60, 60),
            assigned_net,
            assigned_net_original,
            lien_net_sign: line.text(78, 78),
            lien_net,
            lien_net_original,
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }
}

impl CodeDescriptions for Trailer {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}
