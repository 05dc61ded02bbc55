//! Rows of the phenotips candidate list.
//!
//! The candidate list is a tab separated copy of the sendaway worksheet.
//! Older copies stop at `dob` (19 columns), newer ones carry `gender` as
//! well. Extraction only reads the leading columns up to the PRU, so rows
//! are checked against a minimum width rather than a fixed one.

use crate::error::{ModelError, Result};
use crate::pru::Pru;

/// Column indexes in the candidate list.
mod col {
    pub const BATCH: usize = 0;
    pub const DNA_NUMBER: usize = 4;
    pub const PRU: usize = 6;
}

/// Candidate rows need at least this many columns (the PRU is the last one
/// read).
pub const CANDIDATE_MIN_COLUMNS: usize = col::PRU + 1;

/// One data row of the candidate list, not yet checked for width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    /// 1-based line number in the candidate list.
    pub line: u64,
    pub fields: Vec<String>,
}

impl CandidateRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    pub fn batch(&self) -> Option<&str> {
        self.fields.get(col::BATCH).map(String::as_str)
    }
}

/// A candidate whose phenotips block should be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotipsCandidate {
    pub batch: String,
    pub dna_number: String,
    pub pru: Pru,
}

impl PhenotipsCandidate {
    /// # Errors
    ///
    /// Returns [`ModelError::RowTooShort`] if the row ends before the PRU
    /// column.
    pub fn from_row(row: &CandidateRow) -> Result<Self> {
        if row.fields.len() < CANDIDATE_MIN_COLUMNS {
            return Err(ModelError::RowTooShort {
                line: row.line,
                minimum: CANDIDATE_MIN_COLUMNS,
                actual: row.fields.len(),
            });
        }
        Ok(Self {
            batch: row.fields[col::BATCH].clone(),
            dna_number: row.fields[col::DNA_NUMBER].clone(),
            pru: Pru::new(row.fields[col::PRU].as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: usize) -> CandidateRow {
        let mut fields: Vec<String> = (0..width).map(|i| format!("f{i}")).collect();
        fields[0] = "BG1".to_string();
        fields[4] = "D001".to_string();
        fields[6] = "123456:01".to_string();
        CandidateRow::new(2, fields)
    }

    #[test]
    fn worksheet_without_gender_column_is_accepted() {
        let candidate = PhenotipsCandidate::from_row(&row(19)).unwrap();
        assert_eq!(candidate.batch, "BG1");
        assert_eq!(candidate.dna_number, "D001");
        assert_eq!(candidate.pru.as_str(), "123456:01");
        assert!(PhenotipsCandidate::from_row(&row(20)).is_ok());
    }

    #[test]
    fn row_ending_before_pru_is_rejected() {
        let short = CandidateRow::new(5, vec!["BG1".to_string(), "x".to_string()]);
        let err = PhenotipsCandidate::from_row(&short).unwrap_err();
        assert_eq!(
            err,
            ModelError::RowTooShort {
                line: 5,
                minimum: 7,
                actual: 2
            }
        );
        assert_eq!(err.to_string(), "line 5: expected at least 7 fields, found 2");
        assert_eq!(short.batch(), Some("BG1"));
    }
}
