//! Error types for Blueprint data ingestion.

use std::path::PathBuf;

use blueprint_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("input path is not an existing directory: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// One or more rows had the wrong number of fields.
    #[error(
        "{} malformed row(s) in {}: {}",
        .rows.len(),
        .path.display(),
        join_row_errors(.rows)
    )]
    MalformedRows {
        path: PathBuf,
        rows: Vec<ModelError>,
    },

    // === Discovery Errors ===
    /// The report folder holds no `report*.pdf` files.
    #[error("no report PDFs found in {path}")]
    NoReports { path: PathBuf },
}

impl IngestError {
    pub(crate) fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if let csv::ErrorKind::Io(io) = source.kind()
            && io.kind() == std::io::ErrorKind::NotFound
        {
            return Self::FileNotFound { path };
        }
        Self::Csv { path, source }
    }
}

fn join_row_errors(rows: &[ModelError]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/sheet.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/sheet.csv");
    }

    #[test]
    fn test_malformed_rows_display_lists_each_row() {
        let err = IngestError::MalformedRows {
            path: PathBuf::from("sheet.csv"),
            rows: vec![
                ModelError::RowArity {
                    line: 3,
                    expected: 20,
                    actual: 19,
                },
                ModelError::RowArity {
                    line: 8,
                    expected: 20,
                    actual: 2,
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "2 malformed row(s) in sheet.csv: line 3: expected 20 fields, found 19; \
             line 8: expected 20 fields, found 2"
        );
    }

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::file("missing.csv", io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
