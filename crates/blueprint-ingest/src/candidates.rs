//! Phenotips candidate list.

use std::path::Path;

use blueprint_model::CandidateRow;
use tracing::debug;

use crate::delimiter::Delimiter;
use crate::error::{IngestError, Result};

/// Read every data row of the candidate list. The first row is a header and
/// is discarded.
///
/// Rows are returned unchecked: whether a row's width matters depends on its
/// batch, which is decided by the caller.
pub fn read_candidate_list(path: &Path, delimiter: Delimiter) -> Result<Vec<CandidateRow>> {
    let mut reader = delimiter
        .reader_builder()
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::csv(path, e))?;
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(CandidateRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ));
    }
    debug!(path = %path.display(), rows = rows.len(), "read candidate list");
    Ok(rows)
}
