//! A patient's block of lines from a phenotips export.

use crate::pru::Pru;

/// Header lines followed by every export line recorded for one PRU.
///
/// Lines keep their original terminators so that rendering the block
/// reproduces the source bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhenotipsBlock {
    pub pru: Pru,
    pub header: Vec<String>,
    pub lines: Vec<String>,
}

impl PhenotipsBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenate header and data lines verbatim.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.header.iter().chain(&self.lines) {
            out.push_str(line);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_puts_header_first() {
        let block = PhenotipsBlock {
            pru: Pru::new("1:01"),
            header: vec!["id\tterm\n".to_string()],
            lines: vec!["1:01\tHP:1\n".to_string(), "\tHP:2\n".to_string()],
        };
        assert_eq!(block.render(), "id\tterm\n1:01\tHP:1\n\tHP:2\n");
        assert!(!block.is_empty());
    }
}
