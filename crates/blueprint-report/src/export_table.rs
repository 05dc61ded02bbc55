//! Export table CSV writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blueprint_transform::ExportTable;
use csv::{Terminator, WriterBuilder};
use tracing::{info, warn};

/// File name of the export table inside the output directory.
pub const EXPORT_FILE_NAME: &str = "BLUEPRINT_EXPORT.csv";

/// Write the export table to `path`, replacing any existing file.
///
/// Parent directories are created as needed.
pub fn write_export_table(table: &ExportTable, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("create export file: {}", path.display()))?;
    write_export_table_to(table, file)
        .with_context(|| format!("write export file: {}", path.display()))?;

    if table.is_empty() {
        warn!(path = %path.display(), "export table has no data rows");
    }
    info!(
        path = %path.display(),
        rows = table.len(),
        schema = table.schema.label(),
        "wrote export table"
    );
    Ok(path.to_path_buf())
}

/// Serialise the export table as comma separated text with CRLF line endings.
///
/// Fields holding quote characters are quoted and their quotes doubled, so
/// an identifier `"123456:01"` is written as `"""123456:01"""`.
pub fn write_export_table_to<W: Write>(table: &ExportTable, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    writer.write_record(table.header())?;
    for row in &table.rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(())
}
