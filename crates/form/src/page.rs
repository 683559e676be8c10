//! Edit page loading
//!
//! Resolves a slug into everything the edit page renders. A slug that
//! matches no product redirects to the listing before any form exists,
//! except the reserved `new` slug which opens a blank form.

use crate::gallery::{GalleryItem, gallery_items};
use crate::route::{NEW_PRODUCT_SLUG, Route};
use crate::state::ProductForm;
use catalog_core::{CatalogError, CatalogResult};
use catalog_model::{CatalogBackend, Category, Product};

/// Page title when creating
pub const NEW_PRODUCT_TITLE: &str = "New product";

/// Page title when editing
pub const EDIT_PRODUCT_TITLE: &str = "Edit product";

/// Everything the edit page needs for one session
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub title: &'static str,
    pub form: ProductForm,
    pub categories: Vec<Category>,
    /// Stored images of the product, empty when creating
    pub gallery: Vec<GalleryItem>,
    /// The product as loaded, `None` when creating
    pub product: Option<Product>,
}

/// Result of resolving a slug
#[derive(Debug, Clone, PartialEq)]
pub enum EditorLoad {
    Ready(Box<EditorSession>),
    Redirect(Route),
}

/// Load the editor for a slug
pub async fn load_editor(
    backend: &dyn CatalogBackend,
    slug: &str,
    storage_prefix: &str,
) -> CatalogResult<EditorLoad> {
    let product = backend.product_by_slug(slug).await?;

    if product.is_none() && slug != NEW_PRODUCT_SLUG {
        let stale = CatalogError::StaleEntityReference(slug.to_string());
        tracing::info!("{}, redirecting to product list", stale);
        return Ok(EditorLoad::Redirect(Route::ProductList));
    }

    let categories = backend.categories().await?;
    let session = match product {
        Some(product) => EditorSession {
            title: EDIT_PRODUCT_TITLE,
            form: ProductForm::initialize(Some(&product)),
            categories,
            gallery: gallery_items(&product.images, storage_prefix),
            product: Some(product),
        },
        None => EditorSession {
            title: NEW_PRODUCT_TITLE,
            form: ProductForm::initialize(None),
            categories,
            gallery: Vec::new(),
            product: None,
        },
    };

    tracing::debug!("Editor loaded for '{}' ({})", slug, session.title);
    Ok(EditorLoad::Ready(Box::new(session)))
}
