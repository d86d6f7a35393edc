//! File-backed theme document persistence.
//!
//! The theme path comes from `--config` or the `PROMPTLINE_THEME` environment
//! variable.  Its extension picks the serialization format:
//!
//! | Extension          | Format | Library      |
//! |--------------------|--------|--------------|
//! | `.yaml`, `.yml`    | YAML   | `serde_yaml` |
//! | `.toml`            | TOML   | `toml`       |
//! | `.json`            | JSON   | `serde_json` |
//! | anything else      | YAML   | `serde_yaml` |
//!
//! # Round-trip fidelity
//!
//! Saving reproduces every block, segment, `type`, `enabled`, and parameter
//! held in memory, in order.  Comments and exact whitespace of the original
//! file are not preserved.  Parameters are held as JSON values, so YAML tags
//! (`!hex ff0000`) and non-string mapping keys are rejected as malformed.
//!
//! # Atomic replacement
//!
//! [`FileConfigStore::save`] writes to a temporary file in the destination
//! directory and renames it over the theme.  An interrupted or failed write
//! leaves the previous file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use promptline_core::Document;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::ports::{ConfigStore, ToggleError};

/// Serialization backend error.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk syntax of a theme document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    /// Deserializes a document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when `content` is not a document of blocks.
    pub fn parse(self, content: &str) -> Result<Document, FormatError> {
        let document = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(document)
    }

    /// Serializes a document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when a parameter value has no representation
    /// in this format (e.g. `null` in TOML).
    pub fn render(self, document: &Document) -> Result<String, FormatError> {
        let mut content = match self {
            ConfigFormat::Yaml => serde_yaml::to_string(document)?,
            ConfigFormat::Toml => toml::to_string_pretty(document)?,
            ConfigFormat::Json => serde_json::to_string_pretty(document)?,
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }
        Ok(content)
    }
}

/// [`ConfigStore`] reading and writing one theme file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ConfigFormat::from_path(&path);
        Self { path, format }
    }

    fn write_failed(&self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ToggleError {
        ToggleError::ConfigWriteFailed {
            path: self.path.clone(),
            source: source.into(),
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Document, ToggleError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ToggleError::ConfigUnreadable {
            path: self.path.clone(),
            source,
        })?;
        let document = self
            .format
            .parse(&content)
            .map_err(|e| ToggleError::ConfigMalformed {
                path: self.path.clone(),
                source: Box::new(e),
            })?;
        debug!(
            path = %self.path.display(),
            format = ?self.format,
            blocks = document.blocks.len(),
            segments = document.segments().count(),
            "theme loaded"
        );
        Ok(document)
    }

    fn save(&self, document: &Document) -> Result<(), ToggleError> {
        let content = self
            .format
            .render(document)
            .map_err(|e| self.write_failed(e))?;
        write_atomically(&self.path, content.as_bytes()).map_err(|e| self.write_failed(e))?;
        info!(path = %self.path.display(), "theme written");
        Ok(())
    }
}

/// Replaces `path` with `content` via a sibling temporary file and a rename.
///
/// Symlinks are followed so the link target is replaced and the link kept.
/// The existing file's permissions carry over to the replacement.
fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
