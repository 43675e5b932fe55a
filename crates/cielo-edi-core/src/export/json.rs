//! JSON export.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExportError;
use crate::models::{ExportConfig, ProcessingResult, RecordSlice};
use crate::records::{CodeDescriptions, RecordKind};

/// Serializes a whole [`ProcessingResult`] as one JSON document.
///
/// Decimals are written as strings to keep their exact scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonExporter {
    /// Spaces per level; `0` writes compact JSON.
    pub indent: usize,
    /// Add a `<field>_description` key next to every coded field.
    pub include_descriptions: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self {
            indent: 2,
            include_descriptions: true,
        }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            indent: config.json_indent,
            include_descriptions: config.include_descriptions,
        }
    }

    /// The result as a JSON value tree.
    pub fn export_value(&self, result: &ProcessingResult) -> Result<Value, ExportError> {
        let mut value = serde_json::to_value(result)?;

        if self.include_descriptions {
            if let (Some(header), Some(object)) = (&result.header, value.get_mut("header")) {
                add_descriptions(object, header);
            }
            for kind in RecordKind::ALL {
                if let Some(Value::Array(objects)) = value.get_mut(kind.field()) {
                    annotate_list(objects, result.records(kind));
                }
            }
        }

        Ok(value)
    }

    pub fn export(&self, result: &ProcessingResult) -> Result<String, ExportError> {
        let value = self.export_value(result)?;
        self.render(&value)
    }

    pub fn export_file(&self, result: &ProcessingResult, path: &Path) -> Result<(), ExportError> {
        let json = self.export(result)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn render(&self, value: &Value) -> Result<String, ExportError> {
        if self.indent == 0 {
            return Ok(serde_json::to_string(value)?);
        }

        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;

        String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }
}

fn annotate_list(objects: &mut [Value], records: RecordSlice<'_>) {
    match records {
        RecordSlice::ScheduledReceivables(r) => annotate(objects, r),
        RecordSlice::TransactionDetails(r) => annotate(objects, r),
        RecordSlice::Pix(r) => annotate(objects, r),
        RecordSlice::NegotiationSummaries(r) => annotate(objects, r),
        RecordSlice::NegotiationItems(r) => annotate(objects, r),
        RecordSlice::ReceivingAccounts(r) => annotate(objects, r),
        RecordSlice::FinancialReserves(r) => annotate(objects, r),
    }
}

fn annotate<T: CodeDescriptions>(objects: &mut [Value], records: &[T]) {
    for (object, record) in objects.iter_mut().zip(records) {
        add_descriptions(object, record);
    }
}

fn add_descriptions(object: &mut Value, record: &impl CodeDescriptions) {
    if let Some(map) = object.as_object_mut() {
        insert_descriptions(map, record.descriptions());
    }
}

fn insert_descriptions(map: &mut Map<String, Value>, descriptions: Vec<(&'static str, &'static str)>) {
    for (field, description) in descriptions {
        map.insert(format!("{field}_description"), Value::from(description));
    }
}
