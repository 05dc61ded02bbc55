//! Coversheet assembly: PRU lookup from report text and HTML rendering.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::sync::LazyLock;

use blueprint_model::{FamilyCoversheet, LookupRow, PatientCoversheetEntry, Pru};
use regex::Regex;
use tracing::debug;

use crate::error::{Result, TransformError};

static PRU_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d{2}").expect("PRU pattern is valid"));

/// Find the PRU printed on a report.
///
/// The first match in the text is authoritative. Later matches that differ
/// from it are logged and otherwise ignored.
pub fn find_report_pru(text: &str) -> Option<Pru> {
    let mut matches = PRU_PATTERN.find_iter(text).map(|m| m.as_str());
    let first = matches.next()?;
    let others: BTreeSet<&str> = matches.filter(|m| *m != first).collect();
    if !others.is_empty() {
        debug!(
            pru = first,
            ignored = others.len(),
            "report text holds several PRUs; using the first"
        );
    }
    Some(Pru::new(first))
}

/// Lookup rows whose PRU column starts with `family`.
pub fn select_family_rows(rows: &[LookupRow], family: &str) -> Vec<LookupRow> {
    rows.iter()
        .filter(|row| row.pru().is_some_and(|pru| pru.starts_with(family)))
        .cloned()
        .collect()
}

/// Build the coversheet for the family of `pru` from the full lookup table.
///
/// # Errors
///
/// Fails if no lookup row belongs to the family or a matching row is too
/// short to hold every coversheet column.
pub fn build_coversheet(
    rows: &[LookupRow],
    pru: &Pru,
    todays_date: &str,
) -> Result<FamilyCoversheet> {
    let family = pru.family();
    let family_rows = select_family_rows(rows, family);
    if family_rows.is_empty() {
        return Err(TransformError::NoLookupRows {
            family: family.to_string(),
        });
    }
    debug!(family, patients = family_rows.len(), "assembled coversheet rows");
    Ok(FamilyCoversheet::from_lookup_rows(family, &family_rows, todays_date)?)
}

/// Fill the coversheet template.
///
/// Recognised placeholders are `{{ patients }}`, `{{ clinician }}`,
/// `{{ address }}` and `{{ todays_date }}`. Patient values are escaped;
/// clinician and address are stored as HTML in the lookup table and are
/// inserted unchanged.
pub fn render_coversheet_html(template: &str, sheet: &FamilyCoversheet) -> String {
    template
        .replace("{{ patients }}", &patient_rows(&sheet.patients))
        .replace("{{ clinician }}", &sheet.clinician)
        .replace("{{ address }}", &sheet.address)
        .replace("{{ todays_date }}", &escape_html(&sheet.todays_date))
}

fn patient_rows(patients: &[PatientCoversheetEntry]) -> String {
    let mut out = String::new();
    for patient in patients {
        out.push_str("<tr>");
        for value in [
            &patient.name,
            &patient.dob,
            &patient.pid,
            &patient.nhs_number,
            &patient.specimen,
            &patient.specimen_received,
            &patient.specimen_taken,
            &patient.sex,
        ] {
            let _ = write!(out, "<td>{}</td>", escape_html(value));
        }
        out.push_str("</tr>\n");
    }
    out
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
