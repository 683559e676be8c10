//! In-memory catalog backend
//!
//! Reference implementation of [`CatalogBackend`] used by the desktop app
//! and by tests. It applies the same rules a server-side save would:
//! slug normalization, tag splitting, create-vs-update by `id`, and storing
//! uploaded files as product images under generated file names.

use crate::backend::{CatalogBackend, SaveResponse};
use crate::payload::{AttachedFile, ProductPayload};
use crate::product::{Category, PersistedImage, Product};
use crate::serialization::CatalogSnapshot;
use crate::tags::split_tags;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, CategoryId, Gender, ImageId, ProductId, Size};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;
use tokio::sync::RwLock;
use uuid::Uuid;

// ============================================================================
// Draft parsed from a payload
// ============================================================================

/// Product fields decoded from a save payload
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub in_stock: u32,
    pub sizes: BTreeSet<Size>,
    pub tags: Vec<String>,
    pub category_id: CategoryId,
    pub gender: Gender,
    pub images: Vec<AttachedFile>,
}

impl ProductDraft {
    /// Decode and check a save payload
    pub fn from_payload(payload: &ProductPayload) -> CatalogResult<Self> {
        let id = match payload.text("id").map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_uuid("id", raw)?),
            _ => None,
        };

        let price: f64 = required_text(payload, "price")?
            .trim()
            .parse()
            .map_err(|_| CatalogError::invalid_field("price", "must be a number"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::invalid_field("price", "must not be negative"));
        }

        let in_stock = payload
            .text("inStock")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<u32>().map_err(|_| {
                    CatalogError::invalid_field("inStock", "must be a non-negative integer")
                })
            })
            .transpose()?
            .unwrap_or(0);

        let sizes = payload
            .text("sizes")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<Size>)
            .collect::<CatalogResult<BTreeSet<_>>>()?;

        let images = payload.files("images").into_iter().cloned().collect::<Vec<_>>();
        if let Some(bad) = images.iter().find(|f| !f.is_accepted_image()) {
            return Err(CatalogError::invalid_field(
                "images",
                format!("'{}' is not a PNG or JPEG image", bad.name),
            ));
        }

        Ok(Self {
            id,
            title: required_text(payload, "title")?.to_string(),
            slug: normalize_slug(required_text(payload, "slug")?),
            description: required_text(payload, "description")?.to_string(),
            price,
            in_stock,
            sizes,
            tags: split_tags(payload.text("tags").unwrap_or_default()),
            category_id: parse_uuid("categoryId", required_text(payload, "categoryId")?)?,
            gender: required_text(payload, "gender")?.parse()?,
            images,
        })
    }
}

fn required_text<'a>(payload: &'a ProductPayload, key: &str) -> CatalogResult<&'a str> {
    match payload.text(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CatalogError::incomplete([key])),
    }
}

fn parse_uuid(field: &str, raw: &str) -> CatalogResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| CatalogError::invalid_field(field, e.to_string()))
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase a slug and replace whitespace runs with `-`
pub fn normalize_slug(slug: &str) -> String {
    WHITESPACE.replace_all(slug.trim(), "-").to_lowercase()
}

// ============================================================================
// In-memory catalog
// ============================================================================

#[derive(Debug, Default)]
struct CatalogData {
    categories: Vec<Category>,
    products: Vec<Product>,
    /// Uploaded file contents keyed by stored file name
    uploads: HashMap<String, Vec<u8>>,
}

/// Catalog backend that keeps everything in process memory
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    data: RwLock<CatalogData>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the given categories and no products
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            data: RwLock::new(CatalogData {
                categories,
                ..Default::default()
            }),
        }
    }

    /// Create a catalog preloaded from a snapshot
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            data: RwLock::new(CatalogData {
                categories: snapshot.categories,
                products: snapshot.products,
                uploads: HashMap::new(),
            }),
        }
    }

    /// Export the current categories and products
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let data = self.data.read().await;
        CatalogSnapshot::new(data.categories.clone(), data.products.clone())
    }

    /// Insert a product directly, assigning an id if it has none
    pub async fn insert_product(&self, mut product: Product) -> Product {
        if product.id.is_none() {
            product.id = Some(Uuid::new_v4());
        }
        self.data.write().await.products.push(product.clone());
        product
    }

    /// Contents of an uploaded file by stored name
    pub async fn upload(&self, name: &str) -> Option<Vec<u8>> {
        self.data.read().await.uploads.get(name).cloned()
    }

    async fn apply_draft(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let mut data = self.data.write().await;

        if !data.categories.iter().any(|c| c.id == draft.category_id) {
            return Err(CatalogError::CategoryNotFound(draft.category_id.to_string()));
        }

        let slug_taken = data
            .products
            .iter()
            .any(|p| p.slug == draft.slug && p.id != draft.id);
        if slug_taken {
            return Err(CatalogError::DuplicateSlug(draft.slug));
        }

        let index = match draft.id {
            Some(id) => data
                .products
                .iter()
                .position(|p| p.id == Some(id))
                .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?,
            None => {
                let product = Product::new(draft.title.clone(), draft.category_id)
                    .with_id(Uuid::new_v4());
                data.products.push(product);
                data.products.len() - 1
            }
        };

        let mut stored = Vec::with_capacity(draft.images.len());
        for file in draft.images {
            let ext = file.extension().unwrap_or_else(|| "bin".to_string());
            let name = format!("{}.{}", Uuid::new_v4(), ext);
            data.uploads.insert(name.clone(), file.bytes);
            stored.push(PersistedImage::new(name));
        }

        let product = &mut data.products[index];
        product.title = draft.title;
        product.slug = draft.slug;
        product.description = draft.description;
        product.price = draft.price;
        product.in_stock = draft.in_stock;
        product.sizes = draft.sizes;
        product.tags = draft.tags;
        product.category_id = draft.category_id;
        product.gender = draft.gender;
        product.images.extend(stored);

        Ok(product.clone())
    }
}

#[async_trait]
impl CatalogBackend for InMemoryCatalog {
    async fn product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
        let data = self.data.read().await;
        Ok(data.products.iter().find(|p| p.slug == slug).cloned())
    }

    async fn categories(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.data.read().await.categories.clone())
    }

    async fn products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.data.read().await.products.clone())
    }

    async fn save_product(&self, payload: ProductPayload) -> CatalogResult<SaveResponse> {
        let result = match ProductDraft::from_payload(&payload) {
            Ok(draft) => self.apply_draft(draft).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(product) => {
                tracing::info!("Saved product '{}'", product.slug);
                Ok(SaveResponse::saved(product))
            }
            Err(e) => {
                tracing::warn!("Product save rejected: {}", e);
                Ok(SaveResponse::failed())
            }
        }
    }

    async fn delete_image(&self, id: ImageId, url: &str) -> CatalogResult<bool> {
        let mut data = self.data.write().await;

        let removed = data.products.iter_mut().any(|product| {
            let before = product.images.len();
            product.images.retain(|image| image.id != id);
            product.images.len() != before
        });

        if removed {
            data.uploads.remove(url.trim());
            tracing::info!("Deleted image {}", id);
        } else {
            tracing::warn!("Image {} not found for deletion", id);
        }
        Ok(removed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shirt_payload(category: &Category) -> ProductPayload {
        let mut payload = ProductPayload::new();
        payload.append_text("title", "Shirt");
        payload.append_text("slug", "Summer Shirt");
        payload.append_text("description", "A shirt");
        payload.append_text("price", "10");
        payload.append_text("inStock", "5");
        payload.append_text("sizes", "M,S");
        payload.append_text("tags", "a, b");
        payload.append_text("categoryId", category.id.to_string());
        payload.append_text("gender", "men");
        payload
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("  Summer  Shirt "), "summer-shirt");
        assert_eq!(normalize_slug("shirt"), "shirt");
        assert_eq!(normalize_slug("Winter\tWool\n Hat"), "winter-wool-hat");
    }

    #[test]
    fn test_draft_from_payload() {
        let category = Category::new("Shirts");
        let draft = ProductDraft::from_payload(&shirt_payload(&category)).unwrap();

        assert_eq!(draft.id, None);
        assert_eq!(draft.slug, "summer-shirt");
        assert_eq!(draft.price, 10.0);
        assert_eq!(draft.in_stock, 5);
        assert_eq!(draft.tags, vec!["a", "b"]);
        assert_eq!(
            draft.sizes.into_iter().collect::<Vec<_>>(),
            vec![Size::Small, Size::Medium]
        );
        assert_eq!(draft.gender, Gender::Men);
    }

    /// Copy of `payload` with `key` replaced (or dropped when `value` is None)
    fn with_entry(payload: &ProductPayload, key: &str, value: Option<&str>) -> ProductPayload {
        let mut out = ProductPayload::new();
        for (k, v) in payload.iter() {
            if k != key {
                out.append_text(k, v.as_text().unwrap_or_default());
            }
        }
        if let Some(value) = value {
            out.append_text(key, value);
        }
        out
    }

    #[test]
    fn test_draft_rejects_missing_title() {
        let category = Category::new("Shirts");
        let payload = with_entry(&shirt_payload(&category), "title", None);
        let err = ProductDraft::from_payload(&payload).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_draft_rejects_bad_numbers() {
        let category = Category::new("Shirts");
        let base = shirt_payload(&category);

        assert!(ProductDraft::from_payload(&with_entry(&base, "price", Some("-3"))).is_err());
        assert!(ProductDraft::from_payload(&with_entry(&base, "price", Some("ten"))).is_err());
        assert!(ProductDraft::from_payload(&with_entry(&base, "inStock", Some("1.5"))).is_err());
    }

    #[test]
    fn test_draft_rejects_unknown_size() {
        let category = Category::new("Shirts");
        let payload = with_entry(&shirt_payload(&category), "sizes", Some("M,XXXL"));
        assert!(ProductDraft::from_payload(&payload).is_err());
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let category = Category::new("Shirts");
        let catalog = InMemoryCatalog::with_categories(vec![category.clone()]);

        let response = catalog.save_product(shirt_payload(&category)).await.unwrap();
        assert!(response.ok);
        let created = response.product.unwrap();
        assert_eq!(created.slug, "summer-shirt");
        let id = created.id.unwrap();

        let mut update = shirt_payload(&category);
        update.append_text("id", id.to_string());
        update.append_file("images", AttachedFile::from_name("front.png", vec![1, 2, 3]));
        let response = catalog.save_product(update).await.unwrap();
        assert!(response.ok);

        let products = catalog.products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].images.len(), 1);
        assert!(products[0].images[0].url.ends_with(".png"));
        assert_eq!(
            catalog.upload(&products[0].images[0].url).await,
            Some(vec![1, 2, 3])
        );
    }

    #[tokio::test]
    async fn test_save_unknown_category_fails() {
        let catalog = InMemoryCatalog::new();
        let response = catalog
            .save_product(shirt_payload(&Category::new("Ghost")))
            .await
            .unwrap();
        assert_eq!(response, SaveResponse::failed());
    }

    #[tokio::test]
    async fn test_duplicate_slug_fails() {
        let category = Category::new("Shirts");
        let catalog = InMemoryCatalog::with_categories(vec![category.clone()]);

        assert!(catalog.save_product(shirt_payload(&category)).await.unwrap().ok);
        assert!(!catalog.save_product(shirt_payload(&category)).await.unwrap().ok);
    }

    #[tokio::test]
    async fn test_delete_image() {
        let category = Category::new("Shirts");
        let catalog = InMemoryCatalog::with_categories(vec![category.clone()]);
        let image = PersistedImage::new("abc.png");
        catalog
            .insert_product(
                Product::new("Cap", category.id)
                    .with_slug("cap")
                    .with_image(image.clone()),
            )
            .await;

        assert!(catalog.delete_image(image.id, &image.url).await.unwrap());
        assert!(!catalog.delete_image(image.id, &image.url).await.unwrap());

        let cap = catalog.product_by_slug("cap").await.unwrap().unwrap();
        assert!(cap.images.is_empty());
    }
}
