//! Sendaway sheet loading with per-row arity checks.

use std::path::{Path, PathBuf};

use blueprint_model::{ModelError, SendawayRecord};
use tracing::{debug, warn};

use crate::delimiter::Delimiter;
use crate::error::{IngestError, Result};

/// A parsed sendaway sheet.
///
/// Rows that parsed are kept in sheet order; rows with the wrong number of
/// fields are collected separately so that all of them can be reported.
#[derive(Debug, Clone)]
pub struct SendawaySheet {
    pub path: PathBuf,
    pub records: Vec<SendawayRecord>,
    pub malformed: Vec<ModelError>,
}

impl SendawaySheet {
    pub fn is_valid(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Return the records, or every malformed row as a single error.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MalformedRows`] if any row was malformed.
    pub fn into_records(self) -> Result<Vec<SendawayRecord>> {
        if self.malformed.is_empty() {
            Ok(self.records)
        } else {
            Err(IngestError::MalformedRows {
                path: self.path,
                rows: self.malformed,
            })
        }
    }
}

/// Read a sendaway sheet. The first row is a header and is discarded.
///
/// # Errors
///
/// Fails if the file cannot be opened or is not valid delimited text.
/// Malformed rows are not errors here; see [`SendawaySheet::into_records`].
pub fn read_sendaway_sheet(path: &Path, delimiter: Delimiter) -> Result<SendawaySheet> {
    let mut reader = delimiter
        .reader_builder()
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;

    let mut records = Vec::new();
    let mut malformed = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::csv(path, e))?;
        let line = row.position().map_or(0, csv::Position::line);
        let fields: Vec<&str> = row.iter().collect();
        match SendawayRecord::from_fields(line, &fields) {
            Ok(record) => records.push(record),
            Err(error) => {
                warn!(path = %path.display(), %error, "malformed sendaway row");
                malformed.push(error);
            }
        }
    }

    debug!(
        path = %path.display(),
        rows = records.len(),
        malformed = malformed.len(),
        "read sendaway sheet"
    );

    Ok(SendawaySheet {
        path: path.to_path_buf(),
        records,
        malformed,
    })
}
