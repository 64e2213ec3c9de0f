//! Sample-schema catalog.
//!
//! Loads the JSON-Schema documents the playground can render from a
//! directory of `*.json` files and serves them by name.

use glob::glob;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid schema glob pattern for {dir}: {source}")]
    Pattern {
        dir: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One named schema document.
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    /// Catalog name, taken from the file stem.
    pub name: String,
    /// The document's `title`, when it declares one.
    pub title: Option<String>,
    pub document: Value,
}

/// In-memory catalog of the sample schemas served to the playground.
#[derive(Debug, Default, Clone)]
pub struct SchemaCatalog {
    entries: Vec<SchemaEntry>,
}

impl SchemaCatalog {
    /// Load every `*.json` document under `dir`, sorted by name. Files that
    /// fail to read or parse are skipped with a warning so one bad sample
    /// cannot take the whole catalog down.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let pattern = format!("{}/*.json", dir.display());
        let paths = glob(&pattern).map_err(|source| CatalogError::Pattern {
            dir: dir.display().to_string(),
            source,
        })?;

        let mut entries = Vec::new();
        for path in paths.flatten() {
            match Self::load_entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping schema {}: {}", path.display(), e),
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            "Loaded {} sample schemas from {}",
            entries.len(),
            dir.display()
        );
        Ok(Self { entries })
    }

    fn load_entry(path: &Path) -> Result<SchemaEntry, CatalogError> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let title = document
            .get("title")
            .and_then(|t| t.as_str())
            .map(String::from);

        Ok(SchemaEntry {
            name,
            title,
            document,
        })
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
