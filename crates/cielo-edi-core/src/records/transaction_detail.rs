//! Transaction detail (`E`).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine, RATE_SCALE};

/// Highest installment number the layout can carry.
const MAX_INSTALLMENT: u64 = 99;

/// One sale (or adjustment) belonging to a UR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionDetail {
    record_type: RecordTag,

    pub submitting_establishment: String,
    /// Brand the installment settles under.
    pub brand: String,
    pub settlement_type: String,
    /// Installment number, `0` for single-payment sales.
    pub installment: u8,
    pub installment_count: u8,
    pub authorization_code: String,
    pub entry_type: String,
    /// Links the transaction to its `D` record.
    pub ur_key: String,
    pub received_transaction_code: String,
    pub adjustment_code: String,
    pub payment_method: String,

    pub card_bin: String,
    pub card_last_digits: String,
    pub nsu: String,
    pub invoice_number: String,
    pub tid: String,
    pub order_reference: String,

    /// Merchant discount rate, percent.
    pub mdr_rate: Decimal,
    pub automatic_receipt_rate: Decimal,
    pub sale_rate: Decimal,

    pub total_sale_sign: String,
    pub total_sale: Decimal,
    pub total_sale_original: String,

    pub gross_installment_sign: String,
    pub gross_installment: Decimal,
    pub gross_installment_original: String,

    pub net_amount_sign: String,
    pub net_amount: Decimal,
    pub net_amount_original: String,

    pub commission_sign: String,
    pub commission: Decimal,
    pub commission_original: String,

    pub transaction_time: Option<NaiveTime>,
    pub card_group: String,
    pub receiver_document: String,
    pub authorization_brand: String,
    pub unique_sale_code: String,
    pub sales_channel: String,
    pub terminal: String,
    pub pricing_model: String,

    pub authorization_date: Option<NaiveDate>,
    pub capture_date: Option<NaiveDate>,
    pub entry_date: Option<NaiveDate>,
    pub original_entry_date: Option<NaiveDate>,
    pub batch: String,
    pub original_due_date: Option<NaiveDate>,
    pub payment_matrix: String,
    pub card_type: String,
    pub card_origin: String,
    /// Acquirer reference number.
    pub arn: String,
    pub capture_type: String,
}

impl TransactionDetail {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let installment = line.bounded("installment", 18, 19, MAX_INSTALLMENT)? as u8;
        let installment_count = line.bounded("installment_count", 20, 21, MAX_INSTALLMENT)? as u8;

        let (total_sale, total_sale_original) = line.amount(248, 260);
        let (gross_installment, gross_installment_original) = line.amount(262, 274);
        let (net_amount, net_amount_original) = line.amount(276, 288);
        let (commission, commission_original) = line.amount(290, 302);

        Ok(Self {
            record_type: RecordTag::TransactionDetail,
            submitting_establishment: line.text(2, 11),
            brand: line.text(12, 14),
            settlement_type: line.text(15, 17),
            installment,
            installment_count,
            authorization_code: line.text(22, 27),
            entry_type: line.text(28, 29),
            ur_key: line.text(30, 129),
            received_transaction_code: line.text(130, 151),
            adjustment_code: line.text(152, 155),
            payment_method: line.text(156, 158),
            card_bin: line.text(166, 171),
            card_last_digits: line.text(172, 175),
            nsu: line.text(176, 181),
            invoice_number: line.text(182, 191),
            tid: line.text(192, 211),
            order_reference: line.text(212, 231),
            mdr_rate: line.decimal(232, 236, RATE_SCALE),
            automatic_receipt_rate: line.decimal(237, 241, RATE_SCALE),
            sale_rate: line.decimal(242, 246, RATE_SCALE),
            total_sale_sign: line.text(247, 247),
            total_sale,
            total_sale_original,
            gross_installment_sign: line.text(261, 261),
            gross_installment,
            gross_installment_original,
            net_amount_sign: line.text(275, 275),
            net_amount,
            net_amount_original,
            commission_sign: line.text(289, 289),
            commission,
            commission_original,
            transaction_time: line.time(471, 476),
            card_group: line.text(477, 478),
            receiver_document: line.text(479, 492),
            authorization_brand: line.text(493, 495),
            unique_sale_code: line.text(496, 510),
            sales_channel: line.text(541, 543),
            terminal: line.text(544, 551),
            pricing_model: line.text(561, 565),
            authorization_date: line.date(566, 573, DateLayout::DayMonthYear),
            capture_date: line.date(574, 581, DateLayout::DayMonthYear),
            entry_date: line.date(582, 589, DateLayout::DayMonthYear),
            original_entry_date: line.date(590, 597, DateLayout::DayMonthYear),
            batch: line.text(598, 604),
            original_due_date: line.date(630, 637, DateLayout::DayMonthYear),
            payment_matrix: line.text(638, 647),
            card_type: line.text(648, 649),
            card_origin: line.text(650, 650),
            arn: line.text(683, 705),
            capture_type: line.text(707, 708),
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

    pub fn entry_type_description(&self) -> &'static str {
        domains::describe(domains::entry_type, &self.entry_type, domains::UNKNOWN)
    }

    pub fn payment_method_description(&self) -> &'static str {
        domains::describe(domains::payment_method, &self.payment_method, domains::UNKNOWN_FEMININE)
    }

    pub fn adjustment_description(&self) -> &'static str {
        domains::describe(domains::adjustment_reason, &self.adjustment_code, "")
    }

    pub fn card_group_description(&self) -> &'static str {
        domains::describe(domains::card_group, &self.card_group, "")
    }

    pub fn authorization_brand_description(&self) -> &'static str {
        domains::describe(domains::brand, &self.authorization_brand, domains::UNKNOWN_FEMININE)
    }

    pub fn sales_channel_description(&self) -> &'static str {
        domains::describe(domains::sales_channel, &self.sales_channel, "")
    }

    pub fn pricing_model_description(&self) -> &'static str {
        domains::describe(domains::pricing_model, &self.pricing_model, "")
    }

    pub fn card_type_description(&self) -> &'static str {
        domains::describe(domains::card_type, &self.card_type, "")
    }

    pub fn capture_type_description(&self) -> &'static str {
        domains::describe(domains::capture_type, &self.capture_type, "")
    }
}

impl CodeDescriptions for TransactionDetail {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("brand", self.brand_description()),
            ("settlement_type", self.settlement_type_description()),
            ("entry_type", self.entry_type_description()),
            ("payment_method", self.payment_method_description()),
            ("adjustment_code", self.adjustment_description()),
            ("card_group", self.card_group_description()),
            ("authorization_brand", self.authorization_brand_description()),
            ("sales_channel", self.sales_channel_description()),
            ("pricing_model", self.pricing_model_description()),
            ("card_type", self.card_type_description()),
            ("capture_type", self.capture_type_description()),
        ]
    }
}
