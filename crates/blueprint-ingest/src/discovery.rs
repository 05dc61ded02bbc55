//! Report PDF discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

const REPORT_PREFIX: &str = "report";

/// Lists `report*.pdf` files in a directory.
///
/// Returns files sorted by filename.
///
/// # Errors
///
/// Fails if `dir` is not an existing directory or contains no reports.
pub fn list_report_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && is_report_pdf(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(IngestError::NoReports {
            path: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_report_pdf(path: &Path) -> bool {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    let is_report = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(REPORT_PREFIX));
    is_pdf && is_report
}
