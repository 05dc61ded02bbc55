//! Coversheet PDF generation and merging.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::pdf::PdfBackend;

/// Render `html` to a cover page and prepend it to `report`.
///
/// The merged document is written to `<output_dir>/wes_report_<family>.pdf`,
/// replacing any existing file.
pub fn write_report_with_coversheet(
    backend: &dyn PdfBackend,
    report: &Path,
    html: &str,
    family: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let workdir = tempfile::tempdir().context("create coversheet work dir")?;
    let cover = workdir.path().join("coversheet.pdf");
    backend
        .render_html(html, &cover)
        .with_context(|| format!("render coversheet for family {family}"))?;

    let output = output_dir.join(format!("wes_report_{family}.pdf"));
    backend
        .merge(&[cover.as_path(), report], &output)
        .with_context(|| format!("merge coversheet into {}", report.display()))?;

    info!(
        family,
        report = %report.display(),
        output = %output.display(),
        "wrote report with coversheet"
    );
    Ok(output)
}
