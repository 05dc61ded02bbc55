//! Record types shared by the Blueprint export flows.
//!
//! - **sendaway**: one row of the sendaway sheet
//! - **export**: the re-projected export row and its schema versions
//! - **pru**: the `family:individual` patient reference
//! - **candidate**: one row of the phenotips candidate list
//! - **phenotips**: a patient's block of phenotips export lines
//! - **coversheet**: per-family data printed on a report coversheet

pub mod candidate;
pub mod coversheet;
pub mod error;
pub mod export;
pub mod phenotips;
pub mod pru;
pub mod sendaway;

pub use candidate::{CANDIDATE_MIN_COLUMNS, CandidateRow, PhenotipsCandidate};
pub use coversheet::{FamilyCoversheet, LOOKUP_MIN_COLUMNS, LookupRow, PatientCoversheetEntry};
pub use error::{ModelError, Result};
pub use export::{ExportRecord, PhenotypeSuffix, SchemaVersion};
pub use phenotips::PhenotipsBlock;
pub use pru::Pru;
pub use sendaway::{SENDAWAY_COLUMNS, SendawayRecord};
