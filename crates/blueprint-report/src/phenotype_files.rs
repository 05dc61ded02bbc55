//! Per-candidate phenotype file writer.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use blueprint_transform::{CandidateOutcome, CandidateResult};
use tracing::debug;

/// Write one file per extracted candidate into `output_dir`.
///
/// Existing files are overwritten. Candidates that were not found produce
/// no file. Returns the written paths in candidate order.
///
/// # Errors
///
/// Fails before writing anything if a file name is not a plain name inside
/// `output_dir`.
pub fn write_phenotype_files(
    results: &[CandidateResult],
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    for result in results {
        if let CandidateOutcome::Extracted { file_name, .. } = &result.outcome
            && Path::new(file_name).file_name() != Some(OsStr::new(file_name))
        {
            bail!(
                "refusing to write phenotype file for {} outside {}: {file_name}",
                result.pru,
                output_dir.display()
            );
        }
    }

    let mut written = Vec::new();
    for result in results {
        let CandidateOutcome::Extracted { file_name, block } = &result.outcome else {
            continue;
        };
        if written.is_empty() {
            std::fs::create_dir_all(output_dir)
                .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        }
        let path = output_dir.join(file_name);
        std::fs::write(&path, block.render())
            .with_context(|| format!("write phenotype file: {}", path.display()))?;
        debug!(pru = %result.pru, path = %path.display(), "wrote phenotype file");
        written.push(path);
    }
    Ok(written)
}
