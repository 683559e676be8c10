//! # Catalog Model
//!
//! Data contracts shared by the product editor and its backend.
//!
//! ## Core Concepts
//!
//! - **Product**: the catalog record the editor creates and updates
//! - **PersistedImage**: an image already stored for a product
//! - **Category**: classification a product belongs to
//! - **ProductPayload**: the multi-part body sent to the save mutation
//! - **CatalogBackend**: lookup, listing, save and image deletion
//!

pub mod backend;
pub mod image;
pub mod memory;
pub mod payload;
pub mod product;
pub mod serialization;
pub mod tags;

// Re-export commonly used types at crate root
pub use backend::{CatalogBackend, SaveResponse};
pub use image::{DEFAULT_STORAGE_PREFIX, is_absolute_url, resolve_image_url};
pub use memory::{InMemoryCatalog, ProductDraft, normalize_slug};
pub use payload::{ACCEPTED_IMAGE_TYPES, AttachedFile, PayloadValue, ProductPayload, mime_for_name};
pub use product::{Category, PersistedImage, Product};
pub use serialization::{CatalogSnapshot, SNAPSHOT_EXTENSION, load_snapshot, save_snapshot};
pub use tags::{TAG_SEPARATOR, join_tags, split_tags};

// Re-export core types that are commonly used with the model
pub use catalog_core::{
    CatalogError, CatalogResult, CategoryId, Gender, ImageId, ProductId, Size,
};

/// Current schema version for snapshot files
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
