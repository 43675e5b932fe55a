//! CSV export, one file per record kind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::models::{ExportConfig, ProcessingResult, RecordSlice};
use crate::records::RecordKind;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExporter {
    pub delimiter: u8,
    /// Prefix written files with a UTF-8 BOM so spreadsheet tools detect the encoding.
    pub bom: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: b';',
            bom: true,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-ASCII delimiters fall back to `;`.
    pub fn from_config(config: &ExportConfig) -> Self {
        let delimiter = Some(config.csv_delimiter)
            .filter(char::is_ascii)
            .map_or(b';', |c| c as u8);
        Self {
            delimiter,
            bom: config.csv_bom,
        }
    }

    /// Records of one kind as CSV text with a header row; empty when there are none.
    pub fn export(&self, result: &ProcessingResult, kind: RecordKind) -> Result<String, ExportError> {
        let records = result.records(kind);
        if records.is_empty() {
            return Ok(String::new());
        }

        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(vec![]);

        match records {
            RecordSlice::ScheduledReceivables(r) => write_rows(&mut wtr, r)?,
            RecordSlice::TransactionDetails(r) => write_rows(&mut wtr, r)?,
            RecordSlice::Pix(r) => write_rows(&mut wtr, r)?,
            RecordSlice::NegotiationSummaries(r) => write_rows(&mut wtr, r)?,
            RecordSlice::NegotiationItems(r) => write_rows(&mut wtr, r)?,
            RecordSlice::ReceivingAccounts(r) => write_rows(&mut wtr, r)?,
            RecordSlice::FinancialReserves(r) => write_rows(&mut wtr, r)?,
        }

        let data = wtr.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    pub fn export_file(
        &self,
        result: &ProcessingResult,
        kind: RecordKind,
        path: &Path,
    ) -> Result<(), ExportError> {
        let data = self.export(result, kind)?;

        let mut file = File::create(path)?;
        if self.bom {
            file.write_all(UTF8_BOM)?;
        }
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    /// Write `<prefix><kind>.csv` into `dir` for every kind that has records.
    pub fn export_all(
        &self,
        result: &ProcessingResult,
        dir: &Path,
        prefix: &str,
    ) -> Result<Vec<(RecordKind, PathBuf)>, ExportError> {
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::new();
        for kind in RecordKind::ALL {
            if result.records(kind).is_empty() {
                continue;
            }
            let path = dir.join(format!("{prefix}{}.csv", kind.name()));
            self.export_file(result, kind, &path)?;
            written.push((kind, path));
        }
        Ok(written)
    }
}

fn write_rows<T: Serialize>(wtr: &mut csv::Writer<Vec<u8>>, rows: &[T]) -> Result<(), csv::Error> {
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}
