//! Unit of receivables on the payment schedule (`D`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine};

/// A UR (unidade de recebimento): everything due to one holder for one
/// brand, settlement type and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledReceivable {
    record_type: RecordTag,

    /// Establishment that submitted the sales.
    pub submitting_establishment: String,
    pub holder_document: String,
    pub movement_holder_document: String,
    pub receiver_document: String,
    pub brand: String,
    pub settlement_type: String,
    pub payment_matrix: String,
    pub payment_status: String,

    pub gross_amount_sign: String,
    pub gross_amount: Decimal,
    pub gross_amount_original: String,

    pub admin_fee_sign: String,
    pub admin_fee: Decimal,
    pub admin_fee_original: String,

    pub net_amount_sign: String,
    pub net_amount: Decimal,
    pub net_amount_original: String,

    pub bank: String,
    pub branch: String,
    pub account: String,
    pub account_digit: String,

    /// Number of entries (`E` lines) that make up this UR.
    pub entry_count: u32,
    pub entry_type: String,
    pub ur_key: String,

    pub payment_date: Option<NaiveDate>,
    pub bank_send_date: Option<NaiveDate>,
    pub original_due_date: Option<NaiveDate>,

    pub paying_establishment: String,
    pub pending_entry: String,
    pub payment_resend: String,
    pub lien_negotiation: String,
    pub negotiator_document: String,
    pub open_balance: String,
}

impl ScheduledReceivable {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let (gross_amount, gross_amount_original) = line.amount(73, 85);
        let (admin_fee, admin_fee_original) = line.amount(87, 99);
        let (net_amount, net_amount_original) = line.amount(101, 113);

        Ok(Self {
            record_type: RecordTag::ScheduledReceivable,
            submitting_establishment: line.text(2, 11),
            holder_document: line.text(12, 25),
            movement_holder_document: line.text(26, 39),
            receiver_document: line.text(40, 53),
            brand: line.text(54, 56),
            settlement_type: line.text(57, 59),
            payment_matrix: line.text(60, 69),
            payment_status: line.text(70, 71),
            gross_amount_sign: line.text(72, 72),
            gross_amount,
            gross_amount_original,
            admin_fee_sign: line.text(86, 86),
            admin_fee,
            admin_fee_original,
            net_amount_sign: line.text(100, 100),
            net_amount,
            net_amount_original,
            bank: line.text(114, 117),
            branch: line.text(118, 122),
            account: line.text(123, 142),
            account_digit: line.text(143, 143),
            // six digits always fit
            entry_count: line.integer("entry_count", 144, 149)? as u32,
            entry_type: line.text(150, 151),
            ur_key: line.text(152, 251),
            payment_date: line.date(268, 275, DateLayout::DayMonthYear),
            bank_send_date: line.date(276, 283, DateLayout::DayMonthYear),
            original_due_date: line.date(284, 291, DateLayout::DayMonthYear),
            paying_establishment: line.text(292, 301),
            pending_entry: line.text(302, 302),
            payment_resend: line.text(303, 303),
            lien_negotiation: line.text(304, 304),
            negotiator_document: line.text(305, 318),
            open_balance: line.text(319, 319),
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn brand_description(&self) -> &'static str {
        domains::describe(domains::brand, &self.brand, domains::UNKNOWN_FEMININE)
    }

    pub fn settlement_type_description(&self) -> &'static str {
        domains::describe(domains::settlement_type, &self.settlement_type, domains::NOT_IDENTIFIED)
    }

    pub fn payment_status_description(&self) -> &'static str {
        domains::describe(domains::payment_status, &self.payment_status, domains::UNKNOWN)
    }

    pub fn entry_type_description(&self) -> &'static str {
        domains::describe(domains::entry_type, &self.entry_type, domains::UNKNOWN)
    }
}

impl CodeDescriptions for ScheduledReceivable {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("brand", self.brand_description()),
            ("settlement_type", self.settlement_type_description()),
            ("payment_status", self.payment_status_description()),
            ("entry_type", self.entry_type_description()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{parse_implied_decimal, CURRENCY_SCALE};
    use crate::testing::{self, LineBuilder};
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_parse_amounts() {
        let record = ScheduledReceivable::parse(&testing::scheduled_receivable_line()).unwrap();

        assert_eq!(record.record_type(), RecordTag::ScheduledReceivable);
        assert_eq!(record.gross_amount_sign, "+");
        assert_eq!(record.gross_amount, Decimal::from_str("1000.00").unwrap());
        assert_eq!(record.gross_amount_original, "0000000100000");
        assert_eq!(record.admin_fee_sign, "-");
        assert_eq!(record.admin_fee, Decimal::from_str("25.00").unwrap());
        assert_eq!(record.net_amount_sign, "+");
        assert_eq!(record.net_amount, Decimal::from_str("975.00").unwrap());
    }

    #[test]
    fn test_amounts_match_original_digits() {
        let record = ScheduledReceivable::parse(&testing::scheduled_receivable_line()).unwrap();

        for (value, original) in [
            (record.gross_amount, &record.gross_amount_original),
            (record.admin_fee, &record.admin_fee_original),
            (record.net_amount, &record.net_amount_original),
        ] {
            assert_eq!(parse_implied_decimal(original, CURRENCY_SCALE), value);
        }
    }

    #[test]
    fn test_parse_codes_and_dates() {
        let record = ScheduledReceivable::parse(&testing::scheduled_receivable_line()).unwrap();

        assert_eq!(record.submitting_establishment, "1234567890");
        assert_eq!(record.holder_document, "12345678000199");
        assert_eq!(record.brand, "001");
        assert_eq!(record.settlement_type, "002");
        assert_eq!(record.payment_status, "04");
        assert_eq!(record.bank, "0001");
        assert_eq!(record.branch, "00001");
        assert_eq!(record.account, "00000000000012345678");
        assert_eq!(record.account_digit, "9");
        assert_eq!(record.entry_count, 10);
        assert_eq!(record.entry_type, "02");
        assert_eq!(record.ur_key, "UR20241218000000000001");
        assert_eq!(record.payment_date, NaiveDate::from_ymd_opt(2024, 12, 18));
        assert_eq!(record.bank_send_date, NaiveDate::from_ymd_opt(2024, 12, 17));
        assert_eq!(record.original_due_date, NaiveDate::from_ymd_opt(2024, 12, 15));
        assert_eq!(record.lien_negotiation, "S");
        assert_eq!(record.negotiator_document, "");
        assert_eq!(record.open_balance, "N");
    }

    #[test]
    fn test_descriptions() {
        let record = ScheduledReceivable::parse(&testing::scheduled_receivable_line()).unwrap();

        assert_eq!(record.brand_description(), "Visa");
        assert_eq!(record.settlement_type_description(), "Crédito");
        assert_eq!(record.payment_status_description(), "Pago");
        assert_eq!(record.entry_type_description(), "Venda crédito");
    }

    #[test]
    fn test_unmapped_status() {
        let line = LineBuilder::new('D').put(70, "01").width(320).build();
        let record = ScheduledReceivable::parse(&line).unwrap();
        assert_eq!(record.payment_status_description(), "Desconhecido");
        assert_eq!(record.brand_description(), "Desconhecida");
        assert_eq!(record.settlement_type_description(), "Não identificado");
    }

    #[test]
    fn test_bad_amount_digits_are_zero() {
        let line = LineBuilder::new('D').put(73, "ABCDEFGHIJKLM").width(320).build();
        let record = ScheduledReceivable::parse(&line).unwrap();
        assert_eq!(record.gross_amount, Decimal::ZERO);
        assert_eq!(record.gross_amount_original, "ABCDEFGHIJKLM");
    }

    #[test]
    fn test_invalid_entry_count() {
        let line = LineBuilder::new('D').put(144, "00X010").width(320).build();
        let err = ScheduledReceivable::parse(&line).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidInteger {
                field: "entry_count",
                value: "00X010".to_string(),
            }
        );
    }

    #[test]
    fn test_tag_only_line() {
        let record = ScheduledReceivable::parse("D").unwrap();
        assert_eq!(record.gross_amount, Decimal::ZERO);
        assert_eq!(record.entry_count, 0);
        assert_eq!(record.payment_date, None);
    }
}
