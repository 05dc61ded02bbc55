use serde::{Deserialize, Serialize};

/// Field separator of a delimited sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Comma separated, `"` quoting honoured.
    #[default]
    Comma,
    /// Tab separated, read without quote handling.
    Tab,
}

impl Delimiter {
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }

    /// Tab exports from the lab systems contain bare quote characters.
    pub const fn quoting(self) -> bool {
        matches!(self, Self::Comma)
    }

    pub(crate) fn reader_builder(self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.as_byte())
            .quoting(self.quoting())
            .has_headers(true)
            .flexible(true);
        builder
    }
}
