//! Catalog snapshot files
//!
//! A snapshot is a JSON file with the categories and products used to seed
//! the in-memory catalog. It carries a schema version so older files can be
//! upgraded on load.

use crate::SCHEMA_VERSION;
use crate::product::{Category, Product};
use catalog_core::{CatalogError, CatalogResult, Persistable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File extension for catalog snapshots
pub const SNAPSHOT_EXTENSION: &str = "json";

/// Serializable catalog contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// When this snapshot was written
    #[serde(default = "Utc::now")]
    pub exported_at: DateTime<Utc>,

    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Stored products
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Create a snapshot of the given catalog contents
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            exported_at: Utc::now(),
            categories,
            products,
        }
    }

    /// Check if migration is needed
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }

    /// Migrate to the latest schema version
    pub fn migrate(&mut self) -> CatalogResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        // Version 1 is the only format so far.
        self.schema_version = SCHEMA_VERSION;
        Ok(())
    }
}

impl Persistable for CatalogSnapshot {}

/// Load a snapshot from a file, migrating it if needed
pub fn load_snapshot(path: impl AsRef<Path>) -> CatalogResult<CatalogSnapshot> {
    let path = path.as_ref();
    let mut snapshot = CatalogSnapshot::load_from_file(path)?;
    if snapshot.needs_migration() || snapshot.schema_version > SCHEMA_VERSION {
        snapshot.migrate()?;
    }
    tracing::debug!(
        "Loaded snapshot from {} ({} categories, {} products)",
        path.display(),
        snapshot.categories.len(),
        snapshot.products.len()
    );
    Ok(snapshot)
}

/// Save a snapshot to a file, creating parent directories
pub fn save_snapshot(snapshot: &CatalogSnapshot, path: impl AsRef<Path>) -> CatalogResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileWrite {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }
    snapshot.save_to_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Gender, Size};

    #[test]
    fn test_snapshot_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed").join("catalog.json");

        let shirts = Category::new("Shirts");
        let product = Product::new("Shirt", shirts.id)
            .with_slug("shirt")
            .with_gender(Gender::Men)
            .with_size(Size::Medium)
            .with_tag("cotton");
        let snapshot = CatalogSnapshot::new(vec![shirts], vec![product]);

        save_snapshot(&snapshot, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"schemaVersion": 99}"#).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::SchemaVersionMismatch { found: 99, .. }
        ));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let snapshot = CatalogSnapshot::from_json(r#"{"schemaVersion": 1}"#).unwrap();
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.products.is_empty());
        assert!(!snapshot.needs_migration());
    }
}
