//! Blueprint data transformations.
//!
//! This crate holds the pure logic of each flow; reading and writing files is
//! left to `blueprint-ingest` and `blueprint-report`.
//!
//! - **transcode**: sendaway records re-projected into the export schema
//! - **phenotips**: grouping of the phenotips export and per-candidate blocks
//! - **coversheet**: PRU extraction from report text and coversheet HTML

pub mod coversheet;
pub mod error;
pub mod phenotips;
pub mod transcode;

pub use coversheet::{build_coversheet, find_report_pru, render_coversheet_html, select_family_rows};
pub use error::{Result, TransformError};
pub use phenotips::{
    BatchAllowList, CandidateOutcome, CandidateResult, ContiguityPolicy, PhenotipsIndex,
    extract_candidates, select_candidates,
};
pub use transcode::{ExportTable, transcode};
