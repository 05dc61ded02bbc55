//! PDF operations delegated to external tools.
//!
//! Text extraction, HTML rendering and concatenation are not implemented
//! here. [`CommandLineBackend`] drives the usual poppler and wkhtmltopdf
//! binaries; tests substitute their own [`PdfBackend`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;

use anyhow::{Context, Result, bail};
use tracing::debug;

/// The three PDF capabilities the coversheet flow needs.
pub trait PdfBackend {
    /// Plain text of every page of `pdf`.
    fn extract_text(&self, pdf: &Path) -> Result<String>;

    /// Render an HTML document to a PDF file at `output`.
    fn render_html(&self, html: &str, output: &Path) -> Result<()>;

    /// Concatenate `inputs` in order into `output`.
    fn merge(&self, inputs: &[&Path], output: &Path) -> Result<()>;
}

/// Locations of the external PDF tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfTools {
    pub pdftotext: PathBuf,
    pub wkhtmltopdf: PathBuf,
    pub pdfunite: PathBuf,
}

impl Default for PdfTools {
    fn default() -> Self {
        Self {
            pdftotext: PathBuf::from("pdftotext"),
            wkhtmltopdf: PathBuf::from("wkhtmltopdf"),
            pdfunite: PathBuf::from("pdfunite"),
        }
    }
}

/// [`PdfBackend`] that shells out to `pdftotext`, `wkhtmltopdf` and `pdfunite`.
#[derive(Debug, Clone, Default)]
pub struct CommandLineBackend {
    tools: PdfTools,
}

impl CommandLineBackend {
    pub fn new(tools: PdfTools) -> Self {
        Self { tools }
    }
}

impl PdfBackend for CommandLineBackend {
    fn extract_text(&self, pdf: &Path) -> Result<String> {
        let output = Command::new(&self.tools.pdftotext)
            .arg(pdf)
            .arg("-")
            .output()
            .with_context(|| format!("run {}", self.tools.pdftotext.display()))?;
        let output = check_status(&self.tools.pdftotext, output)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn render_html(&self, html: &str, output: &Path) -> Result<()> {
        let tool = &self.tools.wkhtmltopdf;
        let mut child = Command::new(tool)
            .arg("--quiet")
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("run {}", tool.display()))?;
        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("open stdin of {}", tool.display()))?;

        // stderr is drained while the html is still being written.
        let (written, result) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(html.as_bytes()));
            let result = child.wait_with_output();
            (writer.join(), result)
        });
        let result = result.with_context(|| format!("wait for {}", tool.display()))?;
        check_status(tool, result)?;
        match written {
            Ok(written) => written.context("write coversheet html to renderer")?,
            Err(_) => bail!("coversheet html writer thread panicked"),
        }
        Ok(())
    }

    fn merge(&self, inputs: &[&Path], output: &Path) -> Result<()> {
        let result = Command::new(&self.tools.pdfunite)
            .args(inputs)
            .arg(output)
            .output()
            .with_context(|| format!("run {}", self.tools.pdfunite.display()))?;
        check_status(&self.tools.pdfunite, result)?;
        Ok(())
    }
}

fn check_status(tool: &Path, output: Output) -> Result<Output> {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "{} failed ({}): {}",
            tool.display(),
            output.status,
            stderr.trim()
        );
    }
    debug!(tool = %tool.display(), "external tool finished");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_an_error() {
        let backend = CommandLineBackend::new(PdfTools {
            pdftotext: PathBuf::from("/nonexistent/pdftotext"),
            ..PdfTools::default()
        });
        let err = backend.extract_text(Path::new("report.pdf")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/pdftotext"));
    }

    #[cfg(unix)]
    fn script(dir: &Path, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("wkhtmltopdf");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn renderer_chatter_on_stderr_does_not_block_large_html() {
        let dir = tempfile::tempdir().unwrap();
        // Fill the stderr pipe before reading any input; arguments are
        // `--quiet - <output>`.
        let tool = script(dir.path(), "head -c 262144 /dev/zero >&2\ncat > \"$3\"");
        let backend = CommandLineBackend::new(PdfTools {
            wkhtmltopdf: tool,
            ..PdfTools::default()
        });
        let html = format!("<table>{}</table>", "<tr><td>x</td></tr>".repeat(20_000));
        let output = dir.path().join("cover.pdf");

        backend.render_html(&html, &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), html);
    }

    #[cfg(unix)]
    #[test]
    fn renderer_failure_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let tool = script(dir.path(), "cat > /dev/null\necho 'bad html' >&2\nexit 2");
        let backend = CommandLineBackend::new(PdfTools {
            wkhtmltopdf: tool,
            ..PdfTools::default()
        });

        let err = backend
            .render_html("<p>x</p>", &dir.path().join("cover.pdf"))
            .unwrap_err();

        assert!(err.to_string().contains("bad html"));
    }
}
