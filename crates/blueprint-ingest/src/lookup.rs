//! Coversheet lookup table.

use std::path::Path;

use blueprint_model::LookupRow;
use tracing::debug;

use crate::delimiter::Delimiter;
use crate::error::{IngestError, Result};

/// Read every data row of the comma separated lookup table.
///
/// The header row is discarded. Rows are not width-checked here because
/// only the rows for the requested family are ever used.
pub fn read_lookup_table(path: &Path) -> Result<Vec<LookupRow>> {
    let mut reader = Delimiter::Comma
        .reader_builder()
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::csv(path, e))?;
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(LookupRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ));
    }
    debug!(path = %path.display(), rows = rows.len(), "read lookup table");
    Ok(rows)
}
