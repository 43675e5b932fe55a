//! Aggregate output of a whole-file parse.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains;
use crate::records::{
    FinancialReserve, Header, NegotiationItem, NegotiationSummary, PixTransaction, Record,
    RecordKind, ReceivingAccount, ScheduledReceivable, Trailer, TransactionDetail,
};

/// Running counters for one parse.
///
/// The amount totals come from `D` records only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Every line read, blank ones included.
    pub total_lines: usize,
    pub scheduled_receivables: usize,
    pub transaction_details: usize,
    pub pix_transactions: usize,
    pub negotiations: usize,
    pub gross_amount_total: Decimal,
    pub net_amount_total: Decimal,
}

/// A line that produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedLine {
    /// 1-based line number.
    pub line: usize,
    /// First character of the line.
    pub record_type: String,
    /// Decode error; `None` when the tag is simply not recognized.
    pub error: Option<String>,
    /// Leading part of the line.
    pub content: String,
}

/// Everything decoded from one extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub header: Option<Header>,
    pub file_kind: Option<String>,
    pub file_kind_description: Option<String>,
    pub scheduled_receivables: Vec<ScheduledReceivable>,
    pub transaction_details: Vec<TransactionDetail>,
    pub pix_transactions: Vec<PixTransaction>,
    pub negotiation_summaries: Vec<NegotiationSummary>,
    pub negotiation_items: Vec<NegotiationItem>,
    pub receiving_accounts: Vec<ReceivingAccount>,
    pub financial_reserves: Vec<FinancialReserve>,
    pub trailer: Option<Trailer>,
    pub statistics: Statistics,
    pub unparsed_lines: Vec<UnparsedLine>,
}

/// Borrowed view of one record list.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum RecordSlice<'a> {
    ScheduledReceivables(&'a [ScheduledReceivable]),
    TransactionDetails(&'a [TransactionDetail]),
    Pix(&'a [PixTransaction]),
    NegotiationSummaries(&'a [NegotiationSummary]),
    NegotiationItems(&'a [NegotiationItem]),
    ReceivingAccounts(&'a [ReceivingAccount]),
    FinancialReserves(&'a [FinancialReserve]),
}

impl RecordSlice<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::ScheduledReceivables(r) => r.len(),
            Self::TransactionDetails(r) => r.len(),
            Self::Pix(r) => r.len(),
            Self::NegotiationSummaries(r) => r.len(),
            Self::NegotiationItems(r) => r.len(),
            Self::ReceivingAccounts(r) => r.len(),
            Self::FinancialReserves(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProcessingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// File the record under its kind and update the statistics.
    pub fn push(&mut self, record: Record) {
        match record {
            Record::Header(header) => {
                self.file_kind_description = Some(header.file_kind_description().to_string());
                self.file_kind = Some(header.file_kind.clone());
                self.header = Some(header);
            }
            Record::ScheduledReceivable(ur) => {
                self.statistics.scheduled_receivables += 1;
                self.statistics.gross_amount_total += ur.gross_amount;
                self.statistics.net_amount_total += ur.net_amount;
                self.scheduled_receivables.push(ur);
            }
            Record::TransactionDetail(detail) => {
                self.statistics.transaction_details += 1;
                self.transaction_details.push(detail);
            }
            Record::Pix(pix) => {
                self.statistics.pix_transactions += 1;
                self.pix_transactions.push(pix);
            }
            Record::NegotiationSummary(summary) => {
                self.statistics.negotiations += 1;
                self.negotiation_summaries.push(summary);
            }
            Record::NegotiationItem(item) => self.negotiation_items.push(item),
            Record::ReceivingAccount(account) => self.receiving_accounts.push(account),
            Record::FinancialReserve(reserve) => self.financial_reserves.push(reserve),
            Record::Trailer(trailer) => self.trailer = Some(trailer),
        }
    }

    /// The record list for `kind`.
    pub fn records(&self, kind: RecordKind) -> RecordSlice<'_> {
        match kind {
            RecordKind::ScheduledReceivables => {
                RecordSlice::ScheduledReceivables(&self.scheduled_receivables)
            }
            RecordKind::TransactionDetails => RecordSlice::TransactionDetails(&self.transaction_details),
            RecordKind::Pix => RecordSlice::Pix(&self.pix_transactions),
            RecordKind::NegotiationSummaries => {
                RecordSlice::NegotiationSummaries(&self.negotiation_summaries)
            }
            RecordKind::NegotiationItems => RecordSlice::NegotiationItems(&self.negotiation_items),
            RecordKind::ReceivingAccounts => RecordSlice::ReceivingAccounts(&self.receiving_accounts),
            RecordKind::FinancialReserves => RecordSlice::FinancialReserves(&self.financial_reserves),
        }
    }

    /// Number of decoded records of every kind, header and trailer included.
    pub fn record_count(&self) -> usize {
        let lists: usize = RecordKind::ALL.iter().map(|&kind| self.records(kind).len()).sum();
        lists + usize::from(self.header.is_some()) + usize::from(self.trailer.is_some())
    }

    /// Whether any line failed to decode or had an unknown tag.
    pub fn has_unparsed_lines(&self) -> bool {
        !self.unparsed_lines.is_empty()
    }

    /// Description of the file kind, or the unknown placeholder before a header is seen.
    pub fn file_kind_label(&self) -> &str {
        self.file_kind_description.as_deref().unwrap_or(domains::UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordTag;
    use crate::testing;
    use std::str::FromStr;

    fn decode(tag: RecordTag, line: &str) -> Record {
        Record::decode(tag, line).unwrap()
    }

    #[test]
    fn test_push_header_sets_file_kind() {
        let mut result = ProcessingResult::new();
        result.push(decode(RecordTag::Header, &testing::header_line("16")));

        assert_eq!(result.file_kind.as_deref(), Some("16"));
        assert_eq!(result.file_kind_description.as_deref(), Some("Pix"));
        assert!(result.header.is_some());
    }

    #[test]
    fn test_last_header_wins() {
        let mut result = ProcessingResult::new();
        result.push(decode(RecordTag::Header, &testing::header_line("03")));
        result.push(decode(RecordTag::Header, &testing::header_line("42")));

        assert_eq!(result.file_kind.as_deref(), Some("42"));
        assert_eq!(result.file_kind_label(), "Desconhecido");
    }

    #[test]
    fn test_push_scheduled_receivable_updates_totals() {
        let mut result = ProcessingResult::new();
        let line = testing::scheduled_receivable_line();
        result.push(decode(RecordTag::ScheduledReceivable, &line));
        result.push(decode(RecordTag::ScheduledReceivable, &line));

        assert_eq!(result.statistics.scheduled_receivables, 2);
        assert_eq!(result.statistics.gross_amount_total, Decimal::from_str("2000.00").unwrap());
        assert_eq!(result.statistics.net_amount_total, Decimal::from_str("1950.00").unwrap());
    }

    #[test]
    fn test_negotiation_items_have_no_counter() {
        let mut result = ProcessingResult::new();
        result.push(decode(RecordTag::NegotiationSummary, &testing::negotiation_summary_line()));
        result.push(decode(RecordTag::NegotiationItem, &testing::negotiation_item_line()));
        result.push(decode(RecordTag::ReceivingAccount, &testing::receiving_account_line()));
        result.push(decode(RecordTag::FinancialReserve, &testing::financial_reserve_line()));

        assert_eq!(result.statistics.negotiations, 1);
        assert_eq!(result.negotiation_items.len(), 1);
        assert_eq!(result.receiving_accounts.len(), 1);
        assert_eq!(result.financial_reserves.len(), 1);
        assert_eq!(result.statistics.gross_amount_total, Decimal::ZERO);
    }

    #[test]
    fn test_records_by_kind() {
        let mut result = ProcessingResult::new();
        result.push(decode(RecordTag::Pix, &testing::pix_line()));

        for kind in RecordKind::ALL {
            let expected = usize::from(kind == RecordKind::Pix);
            assert_eq!(result.records(kind).len(), expected, "{kind}");
        }
        assert_eq!(result.record_count(), 1);
    }
}
