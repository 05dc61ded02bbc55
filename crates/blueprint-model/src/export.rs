//! Export rows derived from sendaway records.

use serde::{Deserialize, Serialize};

use crate::pru::{Pru, quote};
use crate::sendaway::SendawayRecord;

const V1_HEADER: &[&str] = &[
    "batch",
    "identifier",
    "dna",
    "specimen",
    "dob",
    "gender",
    "referral",
    "family_id",
    "pedigree",
    "phenotype_file",
];

const V2_HEADER: &[&str] = &[
    "batch",
    "identifier",
    "dna",
    "specimen",
    "dob",
    "gender",
    "referral",
    "family_id",
    "pedigree",
    "affected_status",
    "phenotype_file",
];

/// Layout of the export table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Ten columns, bare family id.
    #[default]
    V1,
    /// Adds `affected_status` after `pedigree` and quotes the family id.
    V2,
}

impl SchemaVersion {
    /// Column names written as the header row.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::V1 => V1_HEADER,
            Self::V2 => V2_HEADER,
        }
    }

    pub fn quotes_family_id(self) -> bool {
        matches!(self, Self::V2)
    }

    pub fn has_affected_status(self) -> bool {
        matches!(self, Self::V2)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

/// Suffix appended to derived phenotype file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhenotypeSuffix {
    /// `_phenotype.csv`, referenced from the export table.
    Csv,
    /// `_phenotype.txt`, written by the phenotips extractor.
    Txt,
}

impl PhenotypeSuffix {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "_phenotype.csv",
            Self::Txt => "_phenotype.txt",
        }
    }

    /// `<family>-<individual>_<dna_number><suffix>`
    ///
    /// ```
    /// use blueprint_model::{PhenotypeSuffix, Pru};
    ///
    /// let name = PhenotypeSuffix::Csv.file_name(&Pru::new("123456:01"), "D001");
    /// assert_eq!(name, "123456-01_D001_phenotype.csv");
    /// ```
    pub fn file_name(self, pru: &Pru, dna_number: &str) -> String {
        format!("{}_{}{}", pru.file_stem(), dna_number, self.as_str())
    }
}

/// One row of the export table.
///
/// Every field is a function of a single [`SendawayRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub batch: String,
    pub identifier: String,
    pub dna: String,
    pub specimen: String,
    pub dob: String,
    pub gender: String,
    pub referral: String,
    pub family_id: String,
    pub pedigree: String,
    pub affected_status: Option<String>,
    pub phenotype_file: String,
}

impl ExportRecord {
    pub fn from_sendaway(record: &SendawayRecord, schema: SchemaVersion) -> Self {
        let family = record.pru.family();
        Self {
            batch: record.batch.clone(),
            identifier: record.pru.quoted(),
            dna: record.dna_number.clone(),
            specimen: record.specimen_number.clone(),
            dob: record.dob.clone(),
            gender: record.gender.clone(),
            referral: record.test_type.to_lowercase(),
            family_id: if schema.quotes_family_id() {
                quote(family)
            } else {
                family.to_string()
            },
            pedigree: record.relationship.clone(),
            affected_status: schema
                .has_affected_status()
                .then(|| record.pheno_status.clone()),
            phenotype_file: PhenotypeSuffix::Csv.file_name(&record.pru, &record.dna_number),
        }
    }

    /// Fields in the column order of the schema the record was built for.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.batch.as_str(),
            self.identifier.as_str(),
            self.dna.as_str(),
            self.specimen.as_str(),
            self.dob.as_str(),
            self.gender.as_str(),
            self.referral.as_str(),
            self.family_id.as_str(),
            self.pedigree.as_str(),
        ];
        if let Some(status) = &self.affected_status {
            fields.push(status);
        }
        fields.push(&self.phenotype_file);
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sendaway::SENDAWAY_COLUMNS;

    fn record() -> SendawayRecord {
        let mut fields: Vec<String> = SENDAWAY_COLUMNS.iter().map(|c| c.to_string()).collect();
        fields[0] = "BG1".to_string();
        fields[3] = "WES Trio".to_string();
        fields[4] = "D001".to_string();
        fields[5] = "S19-001".to_string();
        fields[6] = "123456:01".to_string();
        fields[12] = "Proband".to_string();
        fields[14] = "Affected".to_string();
        fields[18] = "01/02/2003".to_string();
        fields[19] = "F".to_string();
        SendawayRecord::from_fields(2, &fields).expect("valid row")
    }

    #[test]
    fn v1_row_matches_header_order() {
        let export = ExportRecord::from_sendaway(&record(), SchemaVersion::V1);
        assert_eq!(
            export.fields(),
            vec![
                "BG1",
                "\"123456:01\"",
                "D001",
                "S19-001",
                "01/02/2003",
                "F",
                "wes trio",
                "123456",
                "Proband",
                "123456-01_D001_phenotype.csv",
            ]
        );
    }

    #[test]
    fn v2_quotes_family_and_adds_affected_status() {
        let export = ExportRecord::from_sendaway(&record(), SchemaVersion::V2);
        assert_eq!(export.family_id, "\"123456\"");
        assert_eq!(export.affected_status.as_deref(), Some("Affected"));
        assert_eq!(export.fields()[9], "Affected");
        assert_eq!(export.fields().len(), SchemaVersion::V2.header().len());
    }

    #[test]
    fn txt_suffix() {
        let name = PhenotypeSuffix::Txt.file_name(&Pru::new("123456:01"), "D001");
        assert_eq!(name, "123456-01_D001_phenotype.txt");
    }
}
