//! Error types for Catalog Admin
//!
//! This module provides unified error handling across the editor,
//! covering form validation, backend persistence, lookups, IO and
//! serialization failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Catalog Admin
#[derive(Debug, Error)]
pub enum CatalogError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// One or more required form fields are empty at submit time
    #[error("Required fields are missing: {}", fields.join(", "))]
    ValidationIncomplete { fields: Vec<String> },

    /// A single field carries a value the backend cannot accept
    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Product not found by slug or id
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A non-"new" slug that resolves to no product
    #[error("No product exists for slug '{0}'")]
    StaleEntityReference(String),

    // ========================================================================
    // Persistence Errors
    // ========================================================================
    /// The save mutation reported failure or could not be reached
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// Another product already owns this slug
    #[error("Duplicate slug: '{0}' already exists")]
    DuplicateSlug(String),

    /// A submission is already running
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,
}

impl CatalogError {
    /// Create a missing-fields error
    pub fn incomplete<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CatalogError::ValidationIncomplete {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        CatalogError::InvalidField {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a persistence failure
    pub fn persistence(msg: impl Into<String>) -> Self {
        CatalogError::PersistenceFailure(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::ValidationIncomplete { .. } | CatalogError::InvalidField { .. }
        )
    }

    /// Check if this error came from the persistence side
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            CatalogError::PersistenceFailure(_) | CatalogError::DuplicateSlug(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            CatalogError::Io(_) | CatalogError::FileRead { .. } | CatalogError::FileWrite { .. }
        )
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Tests
// ============================================================================
