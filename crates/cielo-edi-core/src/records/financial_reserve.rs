//! Financial reserve (`R`).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{CodeDescriptions, RecordTag};
use crate::domains;
use crate::error::DecodeError;
use crate::fields::{DateLayout, FixedWidthLine};

/// Amount held back from a UR as a guarantee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialReserve {
    record_type: RecordTag,

    pub submitting_establishment: String,
    pub movement_holder_document: String,
    pub brand: String,
    pub payment_matrix: String,

    pub reserve_sign: String,
    pub reserve: Decimal,
    pub reserve_original: String,

    pub ur_key: String,
    pub original_due_date: Option<NaiveDate>,
    pub paying_establishment: String,
}

impl FinancialReserve {
    pub fn parse(line: &str) -> Result<Self, DecodeError> {
        let line = FixedWidthLine::new(line);
        let (reserve, reserve_original) = line.amount(40, 52);

        Ok(Self {
            record_type: RecordTag::FinancialReserve,
            submitting_establishment: line.text(2, 11),
            movement_holder_document: line.text(12, 25),
            brand: line.text(26, 28),
            payment_matrix: line.text(29, 38),
            reserve_sign: line.text(39, 39),
            reserve,
            reserve_original,
            ur_key: line.text(53, 152),
            original_due_date: line.date(153, 160, DateLayout::DayMonthYear),
            paying_establishment: line.text(161, 170),
        })
    }

    pub fn record_type(&self) -> RecordTag {
        self.record_type
    }

    pub fn brand_description(&self) -> &'static str {
        domains::describe(domains::brand, &self.brand, domains::UNKNOWN_FEMININE)
    }
}

impl CodeDescriptions for FinancialReserve {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        vec![("brand", self.brand_description())]
    }
}
