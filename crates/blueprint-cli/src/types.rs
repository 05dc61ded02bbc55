use std::path::PathBuf;

use blueprint_model::{Pru, SchemaVersion};
use serde::Serialize;

/// Outcome of one command, printed as a table or as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum RunSummary {
    Export(ExportSummary),
    Phenotips(PhenotipsSummary),
    Coversheet(CoversheetSummary),
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub schema: SchemaVersion,
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhenotipsSummary {
    pub input: PathBuf,
    /// Rows of the sendaway list.
    pub candidates: usize,
    /// Candidates outside the batch allow-list.
    pub skipped: usize,
    pub written: Vec<PathBuf>,
    pub not_found: Vec<Pru>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoversheetSummary {
    pub report_dir: PathBuf,
    pub reports: Vec<ReportOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub report: PathBuf,
    pub pru: Pru,
    pub family: String,
    pub patients: usize,
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_json_is_tagged_by_command() {
        let summary = RunSummary::Phenotips(PhenotipsSummary {
            input: PathBuf::from("list.tsv"),
            candidates: 3,
            skipped: 1,
            written: vec![PathBuf::from("to_send/111-01_D001_phenotype.txt")],
            not_found: vec![Pru::new("999:01")],
        });

        let json = serde_json::to_string_pretty(&summary).unwrap();

        insta::assert_snapshot!(json, @r#"
        {
          "command": "phenotips",
          "input": "list.tsv",
          "candidates": 3,
          "skipped": 1,
          "written": [
            "to_send/111-01_D001_phenotype.txt"
          ],
          "not_found": [
            "999:01"
          ]
        }
        "#);
    }
}
