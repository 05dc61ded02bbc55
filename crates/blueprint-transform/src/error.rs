use blueprint_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Keys whose lines are split across separate runs of the export.
    #[error("phenotips export is not grouped by PRU; split keys: {}", .keys.join(", "))]
    NonContiguousBlocks { keys: Vec<String> },

    /// Allow-listed candidate rows too short to name a PRU.
    #[error(
        "{} malformed candidate row(s): {}",
        .rows.len(),
        .rows.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    MalformedCandidates { rows: Vec<ModelError> },

    /// A derived phenotype file name would leave the output directory.
    #[error("phenotype file name for PRU {pru} contains a path separator: {file_name}")]
    UnsafeFileName { pru: String, file_name: String },

    #[error("no PRU matching <digits>:<2 digits> found in {source_name}")]
    NoPruInReport { source_name: String },

    #[error("no data found for patients matching family id: {family}")]
    NoLookupRows { family: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
