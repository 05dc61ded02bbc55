use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A row did not have the fixed number of positional fields.
    #[error("line {line}: expected {expected} fields, found {actual}")]
    RowArity {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// A row ended before a required positional field.
    #[error("line {line}: expected at least {minimum} fields, found {actual}")]
    RowTooShort {
        line: u64,
        minimum: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
