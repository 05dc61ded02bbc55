//! Patient reference (PRU) identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the family and individual parts of a PRU.
pub const PRU_SEPARATOR: char = ':';

/// A `family:individual` patient reference, e.g. `123456:01`.
///
/// The value is kept exactly as it appeared in the source sheet. Values
/// without a separator are tolerated: the whole value is the family part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pru(String);

impl Pru {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Family identifier: everything before the first separator.
    ///
    /// ```
    /// use blueprint_model::Pru;
    ///
    /// assert_eq!(Pru::new("123456:01").family(), "123456");
    /// assert_eq!(Pru::new("123456").family(), "123456");
    /// ```
    pub fn family(&self) -> &str {
        self.0
            .split_once(PRU_SEPARATOR)
            .map_or(self.0.as_str(), |(family, _)| family)
    }

    /// Individual identifier: everything after the first separator.
    pub fn individual(&self) -> Option<&str> {
        self.0
            .split_once(PRU_SEPARATOR)
            .map(|(_, individual)| individual)
    }

    /// The PRU with every separator replaced by a hyphen, safe for file names.
    pub fn file_stem(&self) -> String {
        self.0.replace(PRU_SEPARATOR, "-")
    }

    /// The PRU wrapped in literal double quotes.
    pub fn quoted(&self) -> String {
        quote(&self.0)
    }
}

impl fmt::Display for Pru {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pru {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Wrap a value in literal double quotes.
pub(crate) fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
