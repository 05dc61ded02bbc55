//! Data printed on a family's report coversheet.

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Lookup rows need at least this many columns (clinician and address are
/// the last two used).
pub const LOOKUP_MIN_COLUMNS: usize = 13;

/// Column indexes in the coversheet lookup table.
mod col {
    pub const LAST_NAME: usize = 0;
    pub const FIRST_NAME: usize = 1;
    pub const DOB: usize = 2;
    pub const SEX: usize = 3;
    pub const NHS_NUMBER: usize = 4;
    pub const PRU: usize = 5;
    pub const SPECIMEN: usize = 6;
    pub const SPECIMEN_RECEIVED: usize = 7;
    pub const SPECIMEN_TYPE: usize = 8;
    pub const SPECIMEN_TAKEN: usize = 9;
    pub const CLINICIAN: usize = 11;
    pub const ADDRESS: usize = 12;
}

/// One data row of the coversheet lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    /// 1-based line number in the lookup file.
    pub line: u64,
    pub fields: Vec<String>,
}

impl LookupRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// The PRU column, if the row is wide enough to have one.
    pub fn pru(&self) -> Option<&str> {
        self.fields.get(col::PRU).map(String::as_str)
    }
}

/// One patient line on a coversheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientCoversheetEntry {
    pub name: String,
    pub dob: String,
    pub pid: String,
    pub nhs_number: String,
    pub specimen: String,
    pub specimen_received: String,
    pub specimen_taken: String,
    pub sex: String,
}

impl PatientCoversheetEntry {
    /// Build an entry from a lookup row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowArity`] if the row is shorter than
    /// [`LOOKUP_MIN_COLUMNS`].
    pub fn from_lookup_row(row: &LookupRow) -> Result<Self> {
        check_lookup_width(row)?;
        let field = |idx: usize| row.fields[idx].as_str();
        Ok(Self {
            name: format!("{} {}", field(col::FIRST_NAME), field(col::LAST_NAME)),
            dob: date_part(field(col::DOB)),
            pid: field(col::PRU).to_string(),
            nhs_number: field(col::NHS_NUMBER).replace(' ', ""),
            specimen: format!("{} {}", field(col::SPECIMEN), field(col::SPECIMEN_TYPE)),
            specimen_received: date_part(field(col::SPECIMEN_RECEIVED)),
            specimen_taken: date_part(field(col::SPECIMEN_TAKEN)),
            sex: field(col::SEX).to_string(),
        })
    }
}

/// Everything needed to render one family's coversheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyCoversheet {
    pub family: String,
    pub patients: Vec<PatientCoversheetEntry>,
    pub clinician: String,
    pub address: String,
    pub todays_date: String,
}

impl FamilyCoversheet {
    /// Build a coversheet from the lookup rows of one family.
    ///
    /// The referring clinician and address are taken from the first row; the
    /// remaining rows are assumed to share them.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowArity`] for the first row that is too short.
    pub fn from_lookup_rows(family: &str, rows: &[LookupRow], todays_date: &str) -> Result<Self> {
        let patients = rows
            .iter()
            .map(PatientCoversheetEntry::from_lookup_row)
            .collect::<Result<Vec<_>>>()?;
        let (clinician, address) = rows
            .first()
            .map(|row| {
                (
                    row.fields[col::CLINICIAN].clone(),
                    row.fields[col::ADDRESS].clone(),
                )
            })
            .unwrap_or_default();
        Ok(Self {
            family: family.to_string(),
            patients,
            clinician,
            address,
            todays_date: todays_date.to_string(),
        })
    }
}

fn check_lookup_width(row: &LookupRow) -> Result<()> {
    if row.fields.len() < LOOKUP_MIN_COLUMNS {
        return Err(ModelError::RowArity {
            line: row.line,
            expected: LOOKUP_MIN_COLUMNS,
            actual: row.fields.len(),
        });
    }
    Ok(())
}

/// Drop the time portion of a `date time` timestamp.
fn date_part(value: &str) -> String {
    value.split(' ').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_row(line: u64, pru: &str, clinician: &str) -> LookupRow {
        let fields = [
            "Smith",
            "Jane",
            "1980-01-02 00:00:00",
            "F",
            "123 456 7890",
            pru,
            "S19-001",
            "2019-05-01 10:30:00",
            "Blood",
            "2019-04-30 09:00:00",
            "unused",
            clinician,
            "Guy's Hospital<br>London",
        ];
        LookupRow::new(line, fields.iter().map(|f| (*f).to_string()).collect())
    }

    #[test]
    fn entry_maps_lookup_columns() {
        let entry = PatientCoversheetEntry::from_lookup_row(&lookup_row(2, "123456:01", "Dr A"))
            .unwrap();
        assert_eq!(entry.name, "Jane Smith");
        assert_eq!(entry.dob, "1980-01-02");
        assert_eq!(entry.pid, "123456:01");
        assert_eq!(entry.nhs_number, "1234567890");
        assert_eq!(entry.specimen, "S19-001 Blood");
        assert_eq!(entry.specimen_received, "2019-05-01");
        assert_eq!(entry.specimen_taken, "2019-04-30");
        assert_eq!(entry.sex, "F");
    }

    #[test]
    fn first_row_supplies_clinician() {
        let rows = vec![
            lookup_row(2, "123456:01", "Dr A"),
            lookup_row(5, "123456:02", "Dr B"),
        ];
        let sheet = FamilyCoversheet::from_lookup_rows("123456", &rows, "2020-07-03").unwrap();
        assert_eq!(sheet.family, "123456");
        assert_eq!(sheet.patients.len(), 2);
        assert_eq!(sheet.clinician, "Dr A");
        assert_eq!(sheet.address, "Guy's Hospital<br>London");
        assert_eq!(sheet.todays_date, "2020-07-03");
    }

    #[test]
    fn short_row_is_rejected() {
        let mut row = lookup_row(9, "123456:01", "Dr A");
        row.fields.truncate(12);
        let err = PatientCoversheetEntry::from_lookup_row(&row).unwrap_err();
        assert_eq!(
            err,
            ModelError::RowArity {
                line: 9,
                expected: 13,
                actual: 12
            }
        );
    }

    #[test]
    fn pru_reads_column_five() {
        assert_eq!(lookup_row(1, "1:01", "x").pru(), Some("1:01"));
        assert_eq!(LookupRow::new(1, vec!["a".to_string()]).pru(), None);
    }
}
