//! Persisted image gallery
//!
//! Display model for the images already stored with a product. Newly
//! attached files are not part of the gallery until a save succeeds and
//! the product is reloaded.

use catalog_core::ImageId;
use catalog_model::{CatalogBackend, PersistedImage, resolve_image_url};

/// One image as the gallery shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Identifier passed to the delete mutation
    pub id: ImageId,
    /// URL exactly as stored
    pub url: String,
    /// URL the image is loaded from
    pub display_url: String,
}

impl GalleryItem {
    pub fn new(image: &PersistedImage, storage_prefix: &str) -> Self {
        Self {
            id: image.id,
            url: image.url.clone(),
            display_url: resolve_image_url(&image.url, storage_prefix),
        }
    }
}

/// Build the gallery items for a product's images, keeping their order
pub fn gallery_items(images: &[PersistedImage], storage_prefix: &str) -> Vec<GalleryItem> {
    images
        .iter()
        .map(|image| GalleryItem::new(image, storage_prefix))
        .collect()
}

/// Delete a stored image
///
/// Returns whether the backend removed it. Backend errors are logged and
/// reported as `false`.
pub async fn delete_image(backend: &dyn CatalogBackend, item: &GalleryItem) -> bool {
    match backend.delete_image(item.id, &item.url).await {
        Ok(deleted) => {
            if deleted {
                tracing::info!("Deleted image {}", item.url);
            } else {
                tracing::warn!("Image {} was not deleted", item.url);
            }
            deleted
        }
        Err(e) => {
            tracing::error!("Failed to delete image {}: {}", item.url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Gender;
    use catalog_model::{Category, InMemoryCatalog, Product};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_items_resolve_relative_and_keep_absolute() {
        let images = vec![
            PersistedImage::new("shirt-1.jpg"),
            PersistedImage::new("https://cdn.example.com/a.png"),
        ];

        let items = gallery_items(&images, "/products");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display_url, "/products/shirt-1.jpg");
        assert_eq!(items[0].url, "shirt-1.jpg");
        assert_eq!(items[1].display_url, "https://cdn.example.com/a.png");
        assert_eq!(items[1].id, images[1].id);
    }

    #[tokio::test]
    async fn test_delete_removes_image_from_catalog() {
        let shirts = Category::new("Shirts");
        let image = PersistedImage::new("shirt-1.jpg");
        let product = Product::new("Shirt", shirts.id)
            .with_slug("shirt")
            .with_gender(Gender::Men)
            .with_image(image.clone());

        let catalog = InMemoryCatalog::with_categories(vec![shirts]);
        catalog.insert_product(product).await;

        let item = GalleryItem::new(&image, "/products");
        assert!(delete_image(&catalog, &item).await);

        let reloaded = catalog.product_by_slug("shirt").await.unwrap().unwrap();
        assert!(reloaded.images.is_empty());

        assert!(!delete_image(&catalog, &item).await);
    }
}
