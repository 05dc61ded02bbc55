//! Line-oriented inputs (phenotips exports and header templates).

use std::path::Path;

use crate::error::{IngestError, Result};

/// Read a text file into lines, keeping each line's terminator.
///
/// Concatenating the returned lines reproduces the file contents exactly.
pub fn read_lines_verbatim(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::file(path, e))?;
    Ok(contents.split_inclusive('\n').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lines_keep_terminators() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a\tb\r\n\tc\nlast").unwrap();
        let lines = read_lines_verbatim(file.path()).unwrap();

        assert_eq!(lines, vec!["a\tb\r\n", "\tc\n", "last"]);
        assert_eq!(lines.concat(), "a\tb\r\n\tc\nlast");
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_lines_verbatim(file.path()).unwrap().is_empty());
    }
}
