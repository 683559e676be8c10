//! Core traits for Catalog Admin
//!
//! Validation for editable state and JSON persistence for catalog files.

use crate::error::{CatalogError, CatalogResult};
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_core::{CatalogError, CatalogResult, Validatable};
///
/// struct Draft {
///     title: String,
/// }
///
/// impl Validatable for Draft {
///     fn validate(&self) -> CatalogResult<()> {
///         if self.title.trim().is_empty() {
///             return Err(CatalogError::incomplete(["title"]));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    fn validate(&self) -> CatalogResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Save to a JSON string
    fn to_json(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> CatalogResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| CatalogError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> CatalogResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(CatalogError::incomplete(["title"]))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestValidatable { valid: true };
        assert!(valid.is_valid());

        let invalid = TestValidatable { valid: false };
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.validate().unwrap_err().to_string(),
            "Required fields are missing: title"
        );
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    impl Persistable for Note {}

    #[test]
    fn test_persistable_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.note");
        let note = Note {
            text: "hello".to_string(),
        };

        note.save_to_file(&path).unwrap();
        assert_eq!(Note::load_from_file(&path).unwrap(), note);
    }

    #[test]
    fn test_persistable_missing_file() {
        let err = Note::load_from_file(std::path::Path::new("/nonexistent/x.note")).unwrap_err();
        assert!(err.is_io());
    }
}
