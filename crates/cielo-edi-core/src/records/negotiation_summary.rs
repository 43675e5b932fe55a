//! Receivables negotiation summary (`A`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine, RATE_SCALE};

/// Totals of one negotiation (sale or pledge of future receivables).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegotiationSummary {
    record_type: RecordTag,

    pub negotiation_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub document: String,
    /// Average term in days.
    pub average_term: u32,
    pub nominal_rate: Decimal,

    pub gross_amount_sign: String,
    pub gross_amount: Decimal,
    pub gross_amount_original: String,

    pub net_amount_sign: String,
    pub net_amount: Decimal,
    pub net_amount_original: String,

    /// Negotiation number at the receivables registrar.
    pub registrar_number: String,
    pub payment_method: String,
    pub effective_rate: Decimal,
}

impl NegotiationSummary {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let (gross_amount, gross_amount_original) = line.amount(37, 49);
        let (net_amount, net_amount_original) = line.amount(51, 63);

        Ok(Self {
            record_type: RecordTag::NegotiationSummary,
            negotiation_date: line.date(2, 7, DateLayout::ShortYearMonthDay),
            payment_date: line.date(8, 13, DateLayout::ShortYearMonthDay),
            document: line.text(14, 27),
            average_term: line.integer("average_term", 28, 30)? as u32,
            nominal_rate: line.decimal(31, 35, RATE_SCALE),
            gross_amount_sign: line.text(36, 36),
            gross_amount,
            gross_amount_original,
            net_amount_sign: line.text(50, 50),
            net_amount,
            net_amount_original,
            registrar_number: line.text(64, 83),
            payment_method: line.text(84, 86),
            effective_rate: line.decimal(87, 91, RATE_SCALE),
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn payment_method_description(&self) -> &'static str {
        domains::describe(domains::payment_method, &self.payment_method, domains::UNKNOWN_FEMININE)
    }
}

impl CodeDescriptions for NegotiationSummary {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![("payment_method", self.payment_method_description())]
    }
}
