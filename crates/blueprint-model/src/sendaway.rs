//! Rows of the sendaway sheet.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::pru::Pru;

/// Positional column names of the sendaway sheet, in sheet order.
pub const SENDAWAY_COLUMNS: [&str; 20] = [
    "batch",
    "batch_date",
    "batch_count",
    "test_type",
    "dna_number",
    "specimen_number",
    "pru",
    "last_name",
    "first_name",
    "all_name",
    "nd_dna",
    "vol_sent",
    "relationship",
    "clinician",
    "pheno_status",
    "dnanomoka",
    "status",
    "ngstestid",
    "dob",
    "gender",
];

/// One sample row of the sendaway sheet.
///
/// Columns are positional; the header row of the sheet is never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendawayRecord {
    pub batch: String,
    pub batch_date: String,
    pub batch_count: String,
    pub test_type: String,
    pub dna_number: String,
    pub specimen_number: String,
    pub pru: Pru,
    pub last_name: String,
    pub first_name: String,
    pub all_name: String,
    pub nd_dna: String,
    pub vol_sent: String,
    pub relationship: String,
    pub clinician: String,
    pub pheno_status: String,
    pub dnanomoka: String,
    pub status: String,
    pub ngstestid: String,
    pub dob: String,
    pub gender: String,
}

impl SendawayRecord {
    /// Build a record from one row of fields.
    ///
    /// `line` is the 1-based line number of the row in its source file and is
    /// only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowArity`] if the row does not have exactly
    /// [`SENDAWAY_COLUMNS`] fields.
    pub fn from_fields<S: AsRef<str>>(line: u64, fields: &[S]) -> Result<Self> {
        let Ok(fields) = <&[S; 20]>::try_from(fields) else {
            return Err(ModelError::RowArity {
                line,
                expected: SENDAWAY_COLUMNS.len(),
                actual: fields.len(),
            });
        };
        let [
            batch,
            batch_date,
            batch_count,
            test_type,
            dna_number,
            specimen_number,
            pru,
            last_name,
            first_name,
            all_name,
            nd_dna,
            vol_sent,
            relationship,
            clinician,
            pheno_status,
            dnanomoka,
            status,
            ngstestid,
            dob,
            gender,
        ] = fields.each_ref().map(|field| field.as_ref().to_string());
        Ok(Self {
            batch,
            batch_date,
            batch_count,
            test_type,
            dna_number,
            specimen_number,
            pru: Pru::new(pru),
            last_name,
            first_name,
            all_name,
            nd_dna,
            vol_sent,
            relationship,
            clinician,
            pheno_status,
            dnanomoka,
            status,
            ngstestid,
            dob,
            gender,
        })
    }
}
