//! The three Blueprint flows, wired from configuration to files on disk.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use blueprint_ingest::{
    list_report_pdfs, read_candidate_list, read_lines_verbatim, read_lookup_table,
    read_sendaway_sheet,
};
use blueprint_model::SchemaVersion;
use blueprint_report::{
    EXPORT_FILE_NAME, PdfBackend, write_export_table, write_phenotype_files,
    write_report_with_coversheet,
};
use blueprint_transform::{
    CandidateOutcome, PhenotipsIndex, TransformError, build_coversheet, extract_candidates,
    find_report_pru, render_coversheet_html, transcode,
};

use crate::config::BlueprintConfig;
use crate::types::{CoversheetSummary, ExportSummary, PhenotipsSummary, ReportOutcome};

/// Transcode a sendaway sheet into the export table.
///
/// `output` defaults to `BLUEPRINT_EXPORT.csv` in the configured export
/// directory and `schema` to the configured schema. Nothing is written if
/// any row of the sheet is malformed.
pub fn run_export(
    config: &BlueprintConfig,
    input: &Path,
    output: Option<&Path>,
    schema: Option<SchemaVersion>,
) -> Result<ExportSummary> {
    let span = info_span!("export", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let schema = schema.unwrap_or(config.export.schema);
    let output = output.map_or_else(
        || config.paths.export_output_dir.join(EXPORT_FILE_NAME),
        Path::to_path_buf,
    );

    let records = read_sendaway_sheet(input, config.export.delimiter)?.into_records()?;
    let table = transcode(&records, schema);
    write_export_table(&table, &output)?;

    info!(
        rows = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "export complete"
    );
    Ok(ExportSummary {
        input: input.to_path_buf(),
        output,
        schema,
        rows: table.len(),
    })
}

/// Write one phenotype file per allowed candidate found in the phenotips
/// export. Candidates that are not found are reported, not fatal.
///
/// Nothing is written if an allow-listed row of the list is malformed; rows
/// of other batches are never checked.
pub fn run_phenotips(config: &BlueprintConfig, sendaway_list: &Path) -> Result<PhenotipsSummary> {
    let span = info_span!("phenotips", input = %sendaway_list.display());
    let _guard = span.enter();
    let paths = &config.paths;

    let candidates = read_candidate_list(sendaway_list, config.phenotips.delimiter)?;
    let export = read_lines_verbatim(&paths.phenotips_export).context("read phenotips export")?;
    let header = read_lines_verbatim(&paths.phenotips_header).context("read phenotips header")?;

    let index = PhenotipsIndex::build(&export);
    let results = extract_candidates(
        &candidates,
        &config.phenotips.allow_list(),
        &index,
        &header,
        config.phenotips.contiguity_policy(),
    )?;
    let written = write_phenotype_files(&results, &paths.phenotips_output_dir)?;

    let not_found = results
        .iter()
        .filter(|result| result.outcome == CandidateOutcome::NotFound)
        .map(|result| result.pru.clone())
        .collect::<Vec<_>>();
    info!(
        candidates = candidates.len(),
        written = written.len(),
        not_found = not_found.len(),
        "phenotips extraction complete"
    );

    Ok(PhenotipsSummary {
        input: sendaway_list.to_path_buf(),
        candidates: candidates.len(),
        skipped: candidates.len() - results.len(),
        written,
        not_found,
    })
}

/// Prepend a generated coversheet to every report PDF in `report_dir`.
///
/// The run stops at the first report whose PRU or family data cannot be
/// found; reports merged before that point are kept.
pub fn run_coversheet(
    config: &BlueprintConfig,
    backend: &dyn PdfBackend,
    report_dir: &Path,
    todays_date: &str,
) -> Result<CoversheetSummary> {
    let span = info_span!("coversheet", report_dir = %report_dir.display());
    let _guard = span.enter();
    let paths = &config.paths;

    let reports = list_report_pdfs(report_dir)?;
    let lookup = read_lookup_table(&paths.coversheet_lookup)?;
    let template = std::fs::read_to_string(&paths.coversheet_template).with_context(|| {
        format!(
            "read coversheet template: {}",
            paths.coversheet_template.display()
        )
    })?;
    info!(reports = reports.len(), "discovered reports");

    let mut outcomes = Vec::with_capacity(reports.len());
    for report in &reports {
        let report_span = info_span!("report", report = %report.display());
        let _report_guard = report_span.enter();

        let text = backend
            .extract_text(report)
            .with_context(|| format!("extract text from {}", report.display()))?;
        let pru = find_report_pru(&text).ok_or_else(|| TransformError::NoPruInReport {
            source_name: report.display().to_string(),
        })?;
        let sheet = build_coversheet(&lookup, &pru, todays_date)?;
        let html = render_coversheet_html(&template, &sheet);
        let output = write_report_with_coversheet(
            backend,
            report,
            &html,
            &sheet.family,
            &paths.coversheet_output_dir,
        )?;

        outcomes.push(ReportOutcome {
            report: report.clone(),
            pru,
            family: sheet.family,
            patients: sheet.patients.len(),
            output,
        });
    }

    Ok(CoversheetSummary {
        report_dir: report_dir.to_path_buf(),
        reports: outcomes,
    })
}
