//! Pix transaction detail (`8`).

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{CURRENCY_SCALE, DateLayout, FixedWidthLine};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PixTransaction {
    record_type: RecordTag,

    pub submitting_establishment: String,
    pub transaction_type: String,
    pub transaction_date: Option<NaiveDate>,
    pub transaction_time: Option<NaiveTime>,
    /// End-to-end identifier assigned by the central bank.
    pub pix_id: String,
    pub nsu: String,
    pub payment_date: Option<NaiveDate>,

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
    pub capture_date: Option<NaiveDate>,

    /// Percent, two decimal places.
    pub admin_rate: Decimal,
    pub admin_tariff: Decimal,
    pub sales_channel: String,
    pub terminal: String,
    pub tx_id: String,
}

impl PixTransaction {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);

        let (gross_amount, gross_amount_original) = line.amount(75, 87);
        let (admin_fee, admin_fee_original) = line.amount(89, 101);
        let (net_amount, net_amount_original) = line.amount(103, 115);

        Ok(Self {
            record_type: RecordTag::Pix,
            submitting_establishment: line.text(2, 11),
            transaction_type: line.text(12, 13),
            transaction_date: line.date(14, 19, DateLayout::ShortYearMonthDay),
            transaction_time: line.time(20, 25),
            pix_id: line.text(26, 61),
            nsu: line.text(62, 67),
            payment_date: line.date(68, 73, DateLayout::ShortYearMonthDay),
            gross_amount_sign: line.text(74, 74),
            gross_amount,
            gross_amount_original,
            admin_fee_sign: line.text(88, 88),
            admin_fee,
            admin_fee_original,
            net_amount_sign: line.text(102, 102),
            net_amount,
            net_amount_original,
            bank: line.text(116, 119),
            branch: line.text(120, 124),
            account: line.text(125, 144),
            capture_date: line.date(145, 150, DateLayout::ShortYearMonthDay),
            admin_rate: line.decimal(151, 155, CURRENCY_SCALE),
            admin_tariff: line.decimal(156, 159, CURRENCY_SCALE),
            sales_channel: line.text(160, 161),
            terminal: line.text(162, 169),
            tx_id: line.text(240, 275),
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn sales_channel_description(&self) -> &'static str {
        domains::describe(domains::sales_channel, &self.sales_channel, "")
    }
}

impl CodeDescriptions for PixTransaction {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![("sales_channel", self.sales_channel_description())]
    }
}
