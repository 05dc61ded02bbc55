//! Phenotips export grouping and per-candidate extraction.
//!
//! The export is a tab separated file in which the first field of a line
//! names the patient (PRU). A patient's first line carries the PRU and any
//! following lines with an empty first field continue the same patient.
//! The export is grouped once into a [`PhenotipsIndex`], so extraction does
//! not depend on the export being sorted; the index remembers any PRU that
//! appears in more than one run so that callers can refuse such exports.

use std::collections::{BTreeMap, BTreeSet};

use blueprint_model::{CandidateRow, PhenotipsBlock, PhenotipsCandidate, PhenotypeSuffix, Pru};
use tracing::{debug, info, warn};

use crate::error::{Result, TransformError};

/// Batches whose candidates are extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchAllowList(BTreeSet<String>);

impl BatchAllowList {
    /// Exact, case-sensitive match on the batch code.
    pub fn contains(&self, batch: &str) -> bool {
        self.0.contains(batch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BatchAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What to do when a PRU's lines are split across several runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContiguityPolicy {
    /// Concatenate the runs in export order and log a warning.
    #[default]
    Merge,
    /// Fail before anything is extracted.
    Require,
}

/// The phenotips export grouped by PRU.
#[derive(Debug, Clone, Default)]
pub struct PhenotipsIndex {
    groups: BTreeMap<String, Vec<String>>,
    split_keys: BTreeSet<String>,
    orphan_lines: usize,
}

impl PhenotipsIndex {
    /// Group export lines by their leading key.
    ///
    /// Lines before the first keyed line belong to no patient and are
    /// counted as orphans.
    pub fn build(lines: &[String]) -> Self {
        let mut index = Self::default();
        let mut current: Option<&str> = None;
        let mut seen: BTreeSet<&str> = BTreeSet::new();

        for line in lines {
            let key = line_key(line);
            // Blank and whitespace-only keys continue the current patient.
            if !key.trim().is_empty() {
                if current != Some(key) && !seen.insert(key) {
                    index.split_keys.insert(key.to_string());
                }
                current = Some(key);
            }
            match current {
                Some(owner) => index
                    .groups
                    .entry(owner.to_string())
                    .or_default()
                    .push(line.clone()),
                None => index.orphan_lines += 1,
            }
        }

        debug!(
            keys = index.groups.len(),
            split_keys = index.split_keys.len(),
            orphan_lines = index.orphan_lines,
            "indexed phenotips export"
        );
        index
    }

    pub fn lines_for(&self, pru: &Pru) -> Option<&[String]> {
        self.groups.get(pru.as_str()).map(Vec::as_slice)
    }

    /// PRUs whose lines appear in more than one separate run.
    pub fn split_keys(&self) -> &BTreeSet<String> {
        &self.split_keys
    }

    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    pub fn key_count(&self) -> usize {
        self.groups.len()
    }

    /// Apply a contiguity policy to the whole export.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonContiguousBlocks`] under
    /// [`ContiguityPolicy::Require`] if any PRU is split.
    pub fn check_contiguity(&self, policy: ContiguityPolicy) -> Result<()> {
        if self.split_keys.is_empty() {
            return Ok(());
        }
        match policy {
            ContiguityPolicy::Require => Err(TransformError::NonContiguousBlocks {
                keys: self.split_keys.iter().cloned().collect(),
            }),
            ContiguityPolicy::Merge => {
                for key in &self.split_keys {
                    warn!(pru = %key, "phenotips lines for PRU are not contiguous; merging runs");
                }
                Ok(())
            }
        }
    }

    /// The header followed by every line for `pru`, or `None` if the PRU
    /// never appears as a key.
    pub fn block_for(&self, pru: &Pru, header: &[String]) -> Option<PhenotipsBlock> {
        self.lines_for(pru).map(|lines| PhenotipsBlock {
            pru: pru.clone(),
            header: header.to_vec(),
            lines: lines.to_vec(),
        })
    }
}

/// Leading tab-delimited field of a line, without its line terminator.
fn line_key(line: &str) -> &str {
    let first = line.split('\t').next().unwrap_or_default();
    first.trim_end_matches(['\r', '\n'])
}

/// Result of processing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// A block was found and should be written to `file_name`.
    Extracted {
        file_name: String,
        block: PhenotipsBlock,
    },
    /// The candidate's PRU does not appear in the export.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateResult {
    pub pru: Pru,
    pub batch: String,
    pub dna_number: String,
    pub outcome: CandidateOutcome,
}

/// Parse the candidate rows whose batch is allow-listed.
///
/// Rows outside the allow-list are skipped before their width is checked, so
/// a short row in a batch that is not being sent never fails the run.
///
/// # Errors
///
/// Returns [`TransformError::MalformedCandidates`] listing every
/// allow-listed row that ends before the PRU column.
pub fn select_candidates(
    rows: &[CandidateRow],
    allow_list: &BatchAllowList,
) -> Result<Vec<PhenotipsCandidate>> {
    let mut selected = Vec::new();
    let mut malformed = Vec::new();
    for row in rows {
        let batch = row.batch().unwrap_or_default();
        if !allow_list.contains(batch) {
            debug!(line = row.line, batch, "batch not in allow-list; skipping candidate");
            continue;
        }
        match PhenotipsCandidate::from_row(row) {
            Ok(candidate) => selected.push(candidate),
            Err(error) => {
                warn!(%error, "malformed candidate row");
                malformed.push(error);
            }
        }
    }
    if !malformed.is_empty() {
        return Err(TransformError::MalformedCandidates { rows: malformed });
    }
    Ok(selected)
}

/// Extract a block for every candidate in an allowed batch.
///
/// Candidates outside the allow-list are skipped silently: they are neither
/// width-checked, looked up nor reported. Results keep candidate order.
///
/// # Errors
///
/// Fails when the contiguity policy rejects the export or an allow-listed
/// row is malformed. A derived file name containing a path separator also
/// fails the whole batch, since callers write files only after this returns.
pub fn extract_candidates(
    rows: &[CandidateRow],
    allow_list: &BatchAllowList,
    index: &PhenotipsIndex,
    header: &[String],
    policy: ContiguityPolicy,
) -> Result<Vec<CandidateResult>> {
    index.check_contiguity(policy)?;
    let candidates = select_candidates(rows, allow_list)?;

    let mut results = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let outcome = match index.block_for(&candidate.pru, header) {
            Some(block) => {
                let file_name = phenotype_file_name(&candidate)?;
                info!(
                    pru = %candidate.pru,
                    lines = block.lines.len(),
                    %file_name,
                    "phenotips block found"
                );
                CandidateOutcome::Extracted { file_name, block }
            }
            None => {
                warn!(pru = %candidate.pru, "not found in phenotips export");
                CandidateOutcome::NotFound
            }
        };
        results.push(CandidateResult {
            pru: candidate.pru,
            batch: candidate.batch,
            dna_number: candidate.dna_number,
            outcome,
        });
    }
    Ok(results)
}

fn phenotype_file_name(candidate: &PhenotipsCandidate) -> Result<String> {
    let file_name = PhenotypeSuffix::Txt.file_name(&candidate.pru, &candidate.dna_number);
    if file_name.contains(['/', '\\']) {
        return Err(TransformError::UnsafeFileName {
            pru: candidate.pru.to_string(),
            file_name,
        });
    }
    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| format!("{line}\n")).collect()
    }

    #[test]
    fn line_key_strips_terminator() {
        assert_eq!(line_key("123:01\tHP:1\n"), "123:01");
        assert_eq!(line_key("123:01\r\n"), "123:01");
        assert_eq!(line_key("\tcontinued\n"), "");
    }

    #[test]
    fn continuation_lines_join_current_key() {
        let index = PhenotipsIndex::build(&lines(&["1:01\ta", "\tb", "2:01\tc", "\td"]));
        let one = index.lines_for(&Pru::new("1:01")).unwrap();
        assert_eq!(one, ["1:01\ta\n", "\tb\n"]);
        let two = index.lines_for(&Pru::new("2:01")).unwrap();
        assert_eq!(two, ["2:01\tc\n", "\td\n"]);
        assert!(index.split_keys().is_empty());
    }

    #[test]
    fn whitespace_only_key_continues_current_block() {
        let index = PhenotipsIndex::build(&lines(&["1:01\ta", "  \tb", " \tc", "2:01\td"]));
        assert_eq!(
            index.lines_for(&Pru::new("1:01")).unwrap(),
            ["1:01\ta\n", "  \tb\n", " \tc\n"]
        );
        assert_eq!(index.key_count(), 2);
    }

    #[test]
    fn lines_before_first_key_are_orphans() {
        let index = PhenotipsIndex::build(&lines(&["\tstray", "", "1:01\ta"]));
        assert_eq!(index.orphan_lines(), 2);
        assert_eq!(index.key_count(), 1);
    }

    #[test]
    fn split_runs_are_detected_and_merged() {
        let index = PhenotipsIndex::build(&lines(&["1:01\ta", "2:01\tb", "1:01\tc", "\td"]));
        assert_eq!(index.split_keys().iter().collect::<Vec<_>>(), vec!["1:01"]);
        assert!(index.check_contiguity(ContiguityPolicy::Merge).is_ok());
        assert_eq!(
            index.lines_for(&Pru::new("1:01")).unwrap(),
            ["1:01\ta\n", "1:01\tc\n", "\td\n"]
        );
    }

    #[test]
    fn require_policy_rejects_split_runs() {
        let index = PhenotipsIndex::build(&lines(&["1:01\ta", "2:01\tb", "1:01\tc"]));
        let err = index.check_contiguity(ContiguityPolicy::Require).unwrap_err();
        assert!(matches!(
            err,
            TransformError::NonContiguousBlocks { ref keys } if keys == &["1:01".to_string()]
        ));
    }

    #[test]
    fn allow_list_is_exact() {
        let allow: BatchAllowList = ["BG1", "BG2"].into_iter().collect();
        assert!(allow.contains("BG1"));
        assert!(!allow.contains("BG10"));
        assert!(!allow.contains("bg1"));
    }
}
