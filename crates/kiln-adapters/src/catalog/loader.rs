//! TOML catalog file loader.
//!
//! # File format
//!
//! ```toml
//! [[dependency]]
//! id          = "kafka-streams"
//! group_id    = "org.apache.kafka"
//! artifact_id = "kafka-streams"
//! version     = "3.7.0"            # optional, BOM-managed when omitted
//! scope       = "runtime"          # optional
//! description = "Kafka Streams"    # optional
//! ```

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{instrument, warn};

use kiln_core::{
    application::{ApplicationError, ports::CatalogEntry},
    domain::Coordinate,
    error::KilnResult,
};

/// Deserialised representation of a catalog file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogFile {
    #[serde(default)]
    pub dependency: Vec<DependencySpec>,
}

/// One `[[dependency]]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct DependencySpec {
    pub id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub description: Option<String>,
}

impl DependencySpec {
    fn into_entry(self) -> KilnResult<CatalogEntry> {
        for (field, value) in [
            ("id", &self.id),
            ("group_id", &self.group_id),
            ("artifact_id", &self.artifact_id),
        ] {
            if value.trim().is_empty() {
                return Err(catalog_error(format!(
                    "dependency '{}' has an empty {field}",
                    self.id
                )));
            }
        }

        let mut coordinate = Coordinate::new(self.group_id, self.artifact_id);
        coordinate.version = self.version.filter(|v| !v.trim().is_empty());
        coordinate.scope = self.scope.filter(|s| !s.trim().is_empty());

        Ok(CatalogEntry {
            id: self.id,
            coordinate,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Reads [`CatalogEntry`] values from one TOML file.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the file. Within one file a repeated id keeps the last entry.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> KilnResult<Vec<CatalogEntry>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            catalog_error(format!("failed to read '{}': {e}", self.path.display()))
        })?;
        Self::parse(&raw, &self.path)
    }

    fn parse(raw: &str, origin: &Path) -> KilnResult<Vec<CatalogEntry>> {
        let file: CatalogFile = toml::from_str(raw)
            .map_err(|e| catalog_error(format!("invalid catalog '{}': {e}", origin.display())))?;

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(file.dependency.len());
        for spec in file.dependency.into_iter().rev() {
            if !seen.insert(spec.id.clone()) {
                warn!(id = %spec.id, "Duplicate catalog id, keeping the later entry");
                continue;
            }
            entries.push(spec.into_entry()?);
        }
        entries.reverse();
        Ok(entries)
    }
}

fn catalog_error(reason: String) -> kiln_core::error::KilnError {
    ApplicationError::Catalog { reason }.into()
}
