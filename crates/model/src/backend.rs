//! Contract for the catalog backend
//!
//! The editor never talks to storage directly. Product lookup, category
//! listing, the save mutation and image deletion all go through
//! [`CatalogBackend`], which is shared as `Arc<dyn CatalogBackend>`.

use crate::payload::ProductPayload;
use crate::product::{Category, Product};
use async_trait::async_trait;
use catalog_core::{CatalogResult, ImageId};

/// Outcome of the save mutation
#[derive(Debug, Clone, PartialEq)]
pub struct SaveResponse {
    /// Whether the backend stored the product
    pub ok: bool,
    /// The stored product, carrying its canonical slug
    pub product: Option<Product>,
}

impl SaveResponse {
    /// A successful save
    pub fn saved(product: Product) -> Self {
        Self {
            ok: true,
            product: Some(product),
        }
    }

    /// A rejected save
    pub fn failed() -> Self {
        Self {
            ok: false,
            product: None,
        }
    }
}

/// Read and write access to the product catalog
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Look up a product (with its stored images) by slug
    async fn product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>>;

    /// List categories in display order
    async fn categories(&self) -> CatalogResult<Vec<Category>>;

    /// List all products
    async fn products(&self) -> CatalogResult<Vec<Product>>;

    /// Create or update a product from a form payload
    ///
    /// An `id` entry selects update, its absence selects create.
    async fn save_product(&self, payload: ProductPayload) -> CatalogResult<SaveResponse>;

    /// Delete a stored image
    async fn delete_image(&self, id: ImageId, url: &str) -> CatalogResult<bool>;
}
