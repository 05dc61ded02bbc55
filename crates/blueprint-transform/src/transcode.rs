//! Sendaway sheet to export table.

use blueprint_model::{ExportRecord, SchemaVersion, SendawayRecord};

/// The export table: a schema and one row per sendaway record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub schema: SchemaVersion,
    pub rows: Vec<ExportRecord>,
}

impl ExportTable {
    pub fn header(&self) -> &'static [&'static str] {
        self.schema.header()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Re-project sendaway records into the export schema, keeping input order.
pub fn transcode(records: &[SendawayRecord], schema: SchemaVersion) -> ExportTable {
    ExportTable {
        schema,
        rows: records
            .iter()
            .map(|record| ExportRecord::from_sendaway(record, schema))
            .collect(),
    }
}
