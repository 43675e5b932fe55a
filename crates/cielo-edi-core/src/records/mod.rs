//! Record types of the Cielo EDI extract.
//!
//! Each line starts with a one-character tag that selects its layout. Every
//! layout has a decoder (`parse`) in its own module.

pub mod financial_reserve;
pub mod header;
pub mod negotiation_item;
pub mod negotiation_summary;
pub mod pix;
pub mod receiving_account;
pub mod scheduled_receivable;
pub mod trailer;
pub mod transaction_detail;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::DecodeError;

pub use financial_reserve::FinancialReserve;
pub use header::Header;
pub use negotiation_item::NegotiationItem;
pub use negotiation_summary::NegotiationSummary;
pub use pix::PixTransaction;
pub use receiving_account::ReceivingAccount;
pub use scheduled_receivable::ScheduledReceivable;
pub use trailer::Trailer;
pub use transaction_detail::TransactionDetail;

/// Record type tag, the first character of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordTag {
    /// `0`
    Header,
    /// `D`, a unit of receivables (UR) on the payment schedule.
    ScheduledReceivable,
    /// `E`
    TransactionDetail,
    /// `8`
    Pix,
    /// `A`
    NegotiationSummary,
    /// `B`
    NegotiationItem,
    /// `C`
    ReceivingAccount,
    /// `R`
    FinancialReserve,
    /// `9`
    Trailer,
}

impl RecordTag {
    pub const ALL: [RecordTag; 9] = [
        Self::Header,
        Self::ScheduledReceivable,
        Self::TransactionDetail,
        Self::Pix,
        Self::NegotiationSummary,
        Self::NegotiationItem,
        Self::ReceivingAccount,
        Self::FinancialReserve,
        Self::Trailer,
    ];

    pub fn as_char(self) -> char {
        match self {
            Self::Header => '0',
            Self::ScheduledReceivable => 'D',
            Self::TransactionDetail => 'E',
            Self::Pix => '8',
            Self::NegotiationSummary => 'A',
            Self::NegotiationItem => 'B',
            Self::ReceivingAccount => 'C',
            Self::FinancialReserve => 'R',
            Self::Trailer => '9',
        }
    }
}

impl TryFrom<char> for RecordTag {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|tag| tag.as_char() == c).ok_or(c)
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for RecordTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Human-readable descriptions for the coded fields of a record.
pub trait CodeDescriptions {
    /// `(field, description)` pairs, keyed by the serialized field name.
    fn descriptions(&self) -> Vec<(&'static str, &'static str)>;
}

/// Any decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Header(Header),
    ScheduledReceivable(ScheduledReceivable),
    TransactionDetail(TransactionDetail),
    Pix(PixTransaction),
    NegotiationSummary(NegotiationSummary),
    NegotiationItem(NegotiationItem),
    ReceivingAccount(ReceivingAccount),
    FinancialReserve(FinancialReserve),
    Trailer(Trailer),
}

impl Record {
    /// Decode `line` with the layout selected by `tag`.
    pub fn decode(tag: RecordTag, line: &str) -> Result<Self, DecodeError> {
        Ok(match tag {
            RecordTag::Header => Self::Header(Header::parse(line)?),
            RecordTag::ScheduledReceivable => {
                Self::ScheduledReceivable(ScheduledReceivable::parse(line)?)
            }
            RecordTag::TransactionDetail => Self::TransactionDetail(TransactionDetail::parse(line)?),
            RecordTag::Pix => Self::Pix(PixTransaction::parse(line)?),
            RecordTag::NegotiationSummary => {
                Self::NegotiationSummary(NegotiationSummary::parse(line)?)
            }
            RecordTag::NegotiationItem => Self::NegotiationItem(NegotiationItem::parse(line)?),
            RecordTag::ReceivingAccount => Self::ReceivingAccount(ReceivingAccount::parse(line)?),
            RecordTag::FinancialReserve => Self::FinancialReserve(FinancialReserve::parse(line)?),
            RecordTag::Trailer => Self::Trailer(Trailer::parse(line)?),
        })
    }

    pub fn tag(&self) -> RecordTag {
        match self {
            Self::Header(r) => r.record_type(),
            Self::ScheduledReceivable(r) => r.record_type(),
            Self::TransactionDetail(r) => r.record_type(),
            Self::Pix(r) => r.record_type(),
            Self::NegotiationSummary(r) => r.record_type(),
            Self::NegotiationItem(r) => r.record_type(),
            Self::ReceivingAccount(r) => r.record_type(),
            Self::FinancialReserve(r) => r.record_type(),
            Self::Trailer(r) => r.record_type(),
        }
    }
}

impl CodeDescriptions for Record {
    fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Header(r) => r.descriptions(),
            Self::ScheduledReceivable(r) => r.descriptions(),
            Self::TransactionDetail(r) => r.descriptions(),
            Self::Pix(r) => r.descriptions(),
            Self::NegotiationSummary(r) => r.descriptions(),
            Self::NegotiationItem(r) => r.descriptions(),
            Self::ReceivingAccount(r) => r.descriptions(),
            Self::FinancialReserve(r) => r.descriptions(),
            Self::Trailer(r) => r.descriptions(),
        }
    }
}

/// The record kinds that repeat within a file and are collected into lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    ScheduledReceivables,
    TransactionDetails,
    Pix,
    NegotiationSummaries,
    NegotiationItems,
    ReceivingAccounts,
    FinancialReserves,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        Self::ScheduledReceivables,
        Self::TransactionDetails,
        Self::Pix,
        Self::NegotiationSummaries,
        Self::NegotiationItems,
        Self::ReceivingAccounts,
        Self::FinancialReserves,
    ];

    /// Short name used for exported file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::ScheduledReceivables => "ur_agenda",
            Self::TransactionDetails => "detalhes",
            Self::Pix => "pix",
            Self::NegotiationSummaries => "negociacoes_resumo",
            Self::NegotiationItems => "negociacoes_detalhe",
            Self::ReceivingAccounts => "contas_recebimento",
            Self::FinancialReserves => "reserva_financeira",
        }
    }

    /// Name of the list in a serialized `ProcessingResult`.
    pub fn field(self) -> &'static str {
        match self {
            Self::ScheduledReceivables => "scheduled_receivables",
            Self::TransactionDetails => "transaction_details",
            Self::Pix => "pix_transactions",
            Self::NegotiationSummaries => "negotiation_summaries",
            Self::NegotiationItems => "negotiation_items",
            Self::ReceivingAccounts => "receiving_accounts",
            Self::FinancialReserves => "financial_reserves",
        }
    }

    pub fn tag(self) -> RecordTag {
        match self {
            Self::ScheduledReceivables => RecordTag::ScheduledReceivable,
            Self::TransactionDetails => RecordTag::TransactionDetail,
            Self::Pix => RecordTag::Pix,
            Self::NegotiationSummaries => RecordTag::NegotiationSummary,
            Self::NegotiationItems => RecordTag::NegotiationItem,
            Self::ReceivingAccounts => RecordTag::ReceivingAccount,
            Self::FinancialReserves => RecordTag::FinancialReserve,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_tag_round_trip() {
        for tag in RecordTag::ALL {
            assert_eq!(RecordTag::try_from(tag.as_char()), Ok(tag));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(RecordTag::try_from('X'), Err('X'));
        assert_eq!(RecordTag::try_from('d'), Err('d'));
    }

    #[test]
    fn test_tag_serializes_as_string() {
        let json = serde_json::to_string(&RecordTag::ScheduledReceivable).unwrap();
        assert_eq!(json, "\"D\"");
    }

    #[test]
    fn test_decode_keeps_tag() {
        let cases = [
            (RecordTag::Header, testing::header_line("04")),
            (RecordTag::ScheduledReceivable, testing::scheduled_receivable_line()),
            (RecordTag::TransactionDetail, testing::transaction_detail_line()),
            (RecordTag::Pix, testing::pix_line()),
            (RecordTag::NegotiationSummary, testing::negotiation_summary_line()),
            (RecordTag::NegotiationItem, testing::negotiation_item_line()),
            (RecordTag::ReceivingAccount, testing::receiving_account_line()),
            (RecordTag::FinancialReserve, testing::financial_reserve_line()),
            (RecordTag::Trailer, testing::trailer_line()),
        ];

        for (tag, line) in cases {
            let record = Record::decode(tag, &line).unwrap();
            assert_eq!(record.tag(), tag);
        }
    }

    #[test]
    fn test_record_kind_tags_are_distinct() {
        let mut tags: Vec<char> = RecordKind::ALL.iter().map(|k| k.tag().as_char()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), RecordKind::ALL.len());
    }
}
