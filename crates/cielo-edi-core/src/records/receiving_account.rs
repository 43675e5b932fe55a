//! Receiving bank account credit (`C`).

use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::error::DecodeError;
use crate::fields::FixedWidthLine;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceivingAccount {
    record_type: RecordTag,

    pub bank: String,
    pub branch: String,
    pub account: String,

    pub deposited_sign: String,
    pub deposited: Decimal,
    pub deposited_original: String,
}

impl ReceivingAccount {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);
        let (deposited, deposited_original) = line.amount(32, 44);

        Ok(Self {
            record_type: RecordTag::ReceivingAccount,
            bank: line.text(2, 5),
            branch: line.text(6, 10),
            account: line.text(11, 30),
            deposited_sign: line.text(31, 31),
            deposited,
            deposited_original,
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }
}

impl CodeDescriptions for ReceivingAccount {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}
