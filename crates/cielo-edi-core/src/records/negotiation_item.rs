//! Receivables negotiation item (`B`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine, RATE_SCALE};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegotiationItem {
    record_type: RecordTag,

    pub negotiation_date: Option<NaiveDate>,
    pub original_due_date: Option<NaiveDate>,
    pub document: String,
    pub brand: String,
    pub settlement_type: String,

    pub gross_amount_sign: String,
    pub gross_amount: Decimal,
    pub gross_amount_original: String,

    pub net_amount_sign: String,
    pub net_amount: Decimal,
    pub net_amount_original: String,

    pub effective_rate: Decimal,
    /// Institution the receivables were negotiated with.
    pub financial_institution: String,
    pub establishment: String,

    pub discount_sign: String,
    pub discount: Decimal,
    pub discount_original: String,
}

impl NegotiationItem {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let (gross_amount, gross_amount_original) = line.amount(35, 47);
        let (net_amount, net_amount_original) = line.amount(49, 61);
        let (discount, discount_original) = line.amount(128, 140);

        Ok(Self {
            record_type: RecordTag::NegotiationItem,
            negotiation_date: line.date(2, 7, DateLayout::ShortYearMonthDay),
            original_due_date: line.date(8, 13, DateLayout::ShortYearMonthDay),
            document: line.text(14, 27),
            brand: line.text(28, 30),
            settlement_type: line.text(31, 33),
            gross_amount_sign: line.text(34, 34),
            gross_amount,
            gross_amount_original,
            net_amount_sign: line.text(48, 48),
            net_amount,
            net_amount_original,
            effective_rate: line.decimal(62, 66, RATE_SCALE),
            financial_institution: line.text(67, 116),
            establishment: line.text(117, 126),
            discount_sign: line.text(127, 127),
            discount,
            discount_original,
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn brand_description(&self) -> &'static str {
        domains::describe(domains::brand, &self.brand, domains::UNKNOWN_FEMININE)
    }
}

impl CodeDescriptions for NegotiationItem {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![("brand", self.brand_description())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_parse_item() {
        let record = NegotiationItem::parse(&testing::negotiation_item_line()).unwrap();

        assert_eq!(record.record_type(), RecordTag::NegotiationItem);
        assert_eq!(record.negotiation_date, NaiveDate::from_ymd_opt(2024, 12, 18));
        assert_eq!(record.original_due_date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(record.brand, "001");
        assert_eq!(record.brand_description(), "Visa");
        assert_eq!(record.gross_amount, Decimal::from_str("500.00").unwrap());
        assert_eq!(record.net_amount, Decimal::from_str("482.50").unwrap());
        assert_eq!(record.effective_rate, Decimal::from_str("3.500").unwrap());
        assert_eq!(record.financial_institution, "Banco Exemplo");
        assert_eq!(record.establishment, "1234567890");
        assert_eq!(record.discount_sign, "-");
        assert_eq!(record.discount, Decimal::from_str("17.50").unwrap());
        assert_eq!(record.discount_original, "0000000001750");
    }

    #[test]
    fn test_accented_institution_name() {
        let line = testing::LineBuilder::new('B')
            .put(67, "Cooperativa de Crédito São João")
            .put(117, "1234567890")
            .build();
        let record = NegotiationItem::parse(&line).unwrap();

        assert_eq!(record.financial_institution, "Cooperativa de Crédito São João");
        assert_eq!(record.establishment, "1234567890");
    }
}
