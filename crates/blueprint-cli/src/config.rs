//! Run configuration loaded from `blueprint.toml`.
//!
//! Every input and output location is named here and resolved once at start
//! up; commands receive the resolved [`BlueprintConfig`] explicitly.

use std::path::{Path, PathBuf};

use blueprint_ingest::Delimiter;
use blueprint_model::SchemaVersion;
use blueprint_report::PdfTools;
use blueprint_transform::{BatchAllowList, ContiguityPolicy};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "blueprint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlueprintConfig {
    pub paths: PathsConfig,
    pub export: ExportConfig,
    pub phenotips: PhenotipsConfig,
    pub tools: ToolsConfig,
}

/// Named file locations. Relative paths are resolved against the directory
/// holding the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub export_output_dir: PathBuf,
    pub phenotips_export: PathBuf,
    pub phenotips_header: PathBuf,
    pub phenotips_output_dir: PathBuf,
    pub coversheet_lookup: PathBuf,
    pub coversheet_template: PathBuf,
    pub coversheet_output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            export_output_dir: PathBuf::from("."),
            phenotips_export: PathBuf::from("phenotips.txt"),
            phenotips_header: PathBuf::from("header_template.txt"),
            phenotips_output_dir: PathBuf::from("to_send"),
            coversheet_lookup: PathBuf::from("html_db.csv"),
            coversheet_template: PathBuf::from("report_template.html"),
            coversheet_output_dir: PathBuf::from("reports"),
        }
    }
}

impl PathsConfig {
    fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.export_output_dir,
            &mut self.phenotips_export,
            &mut self.phenotips_header,
            &mut self.phenotips_output_dir,
            &mut self.coversheet_lookup,
            &mut self.coversheet_template,
            &mut self.coversheet_output_dir,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub schema: SchemaVersion,
    pub delimiter: Delimiter,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhenotipsConfig {
    /// Batch codes whose candidates are extracted.
    pub batches: Vec<String>,
    pub delimiter: Delimiter,
    /// Fail when a PRU's lines are split across the export instead of
    /// merging them.
    pub require_contiguous_blocks: bool,
}

impl Default for PhenotipsConfig {
    fn default() -> Self {
        Self {
            batches: Vec::new(),
            delimiter: Delimiter::Tab,
            require_contiguous_blocks: false,
        }
    }
}

impl PhenotipsConfig {
    pub fn allow_list(&self) -> BatchAllowList {
        self.batches.iter().map(String::as_str).collect()
    }

    pub fn contiguity_policy(&self) -> ContiguityPolicy {
        if self.require_contiguous_blocks {
            ContiguityPolicy::Require
        } else {
            ContiguityPolicy::Merge
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub pdftotext: PathBuf,
    pub wkhtmltopdf: PathBuf,
    pub pdfunite: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let tools = PdfTools::default();
        Self {
            pdftotext: tools.pdftotext,
            wkhtmltopdf: tools.wkhtmltopdf,
            pdfunite: tools.pdfunite,
        }
    }
}

impl From<&ToolsConfig> for PdfTools {
    fn from(tools: &ToolsConfig) -> Self {
        Self {
            pdftotext: tools.pdftotext.clone(),
            wkhtmltopdf: tools.wkhtmltopdf.clone(),
            pdfunite: tools.pdfunite.clone(),
        }
    }
}

impl BlueprintConfig {
    /// Parse a config document; relative paths are resolved against `base`.
    pub fn from_toml_str(
        contents: &str,
        base: &Path,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: origin.to_path_buf(),
            source: e,
        })?;
        config.paths.resolve_against(base);
        Ok(config)
    }
}

/// Load the run configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
/// the working directory is used if present, otherwise built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<BlueprintConfig, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file; using defaults");
            String::new()
        }
        Err(e) => return Err(ConfigError::Io { path, source: e }),
    };

    let base = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = BlueprintConfig::from_toml_str(&contents, base, &path)?;
    if config.phenotips.batches.is_empty() {
        warn!("no phenotips batches configured; phenotips extraction will skip every candidate");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config =
            BlueprintConfig::from_toml_str("", Path::new("/base"), Path::new("x")).unwrap();
        assert_eq!(config.export.schema, SchemaVersion::V1);
        assert_eq!(config.export.delimiter, Delimiter::Comma);
        assert_eq!(config.phenotips.delimiter, Delimiter::Tab);
        assert!(config.phenotips.batches.is_empty());
        assert_eq!(config.paths.phenotips_output_dir, PathBuf::from("/base/to_send"));
        assert_eq!(config.tools.pdfunite, PathBuf::from("pdfunite"));
    }

    #[test]
    fn parses_full_document() {
        let doc = r#"
            [paths]
            export_output_dir = "/shared/export"
            phenotips_export = "phenotips_2020-05-22.txt"

            [export]
            schema = "v2"
            delimiter = "tab"

            [phenotips]
            batches = ["BG1", "BG2"]
            require_contiguous_blocks = true

            [tools]
            wkhtmltopdf = "/opt/wkhtmltopdf/bin/wkhtmltopdf"
        "#;
        let config =
            BlueprintConfig::from_toml_str(doc, Path::new("/cfg"), Path::new("x")).unwrap();

        assert_eq!(config.paths.export_output_dir, PathBuf::from("/shared/export"));
        assert_eq!(
            config.paths.phenotips_export,
            PathBuf::from("/cfg/phenotips_2020-05-22.txt")
        );
        assert_eq!(config.export.schema, SchemaVersion::V2);
        assert_eq!(config.export.delimiter, Delimiter::Tab);
        assert!(config.phenotips.allow_list().contains("BG2"));
        assert_eq!(config.phenotips.contiguity_policy(), ContiguityPolicy::Require);
        assert_eq!(
            PdfTools::from(&config.tools).wkhtmltopdf,
            PathBuf::from("/opt/wkhtmltopdf/bin/wkhtmltopdf")
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = BlueprintConfig::from_toml_str(
            "[export]\nshema = \"v2\"\n",
            Path::new("."),
            Path::new("blueprint.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().starts_with("failed to parse config blueprint.toml"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/blueprint.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
