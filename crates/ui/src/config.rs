//! Desktop configuration
//!
//! Read from the TOML file named by `CATALOG_ADMIN_CONFIG`, else from
//! `catalog-admin.toml` in the working directory. Missing files and
//! missing keys fall back to defaults.

use catalog_core::{CatalogError, CatalogResult};
use catalog_model::DEFAULT_STORAGE_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "CATALOG_ADMIN_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "catalog-admin.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Prefix joined in front of relative image URLs
    pub storage_prefix: String,
    /// Catalog snapshot to preload into the in-memory backend
    pub seed_file: Option<PathBuf>,
    pub window: WindowConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            seed_file: None,
            window: WindowConfig::default(),
        }
    }
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: crate::TITLE.to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl AdminConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> CatalogResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_from(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the usual places
    ///
    /// An explicitly named file must exist; the working directory file is
    /// optional.
    pub fn load() -> CatalogResult<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load_from(PathBuf::from(path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }

        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn check(&self) -> CatalogResult<()> {
        if self.storage_prefix.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "storage_prefix must not be empty".to_string(),
            ));
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(CatalogError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AdminConfig::from_toml("").unwrap();
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.storage_prefix, "/products");
    }

    #[test]
    fn test_partial_file_overrides_keys() {
        let config = AdminConfig::from_toml(
            r#"
            storage_prefix = "https://cdn.example.com/products"
            seed_file = "catalog.json"

            [window]
            width = 900.0
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_prefix, "https://cdn.example.com/products");
        assert_eq!(config.seed_file, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.window.width, 900.0);
        assert_eq!(config.window.height, 800.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AdminConfig::from_toml("storage_prefix = \"  \"").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));

        let err = AdminConfig::from_toml("[window]\nheight = 0.0").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));

        let err = AdminConfig::from_toml("storage_prefix = 3").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog-admin.toml");
        std::fs::write(&path, "[window]\ntitle = \"Shop\"\n").unwrap();

        let config = AdminConfig::load_from(&path).unwrap();
        assert_eq!(config.window.title, "Shop");

        let missing = AdminConfig::load_from(dir.path().join("nope.toml")).unwrap_err();
        assert!(missing.is_io());
    }
}
