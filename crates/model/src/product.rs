//! Product, image and category records
//!
//! These are the data contracts exchanged with the catalog backend. They
//! carry no behavior beyond construction helpers.

use catalog_core::{CategoryId, Gender, ImageId, ProductId, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

// ============================================================================
// Product
// ============================================================================

/// A catalog product as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Present for stored products, absent for drafts that were never saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,

    /// Display title
    pub title: String,

    /// URL slug, unique across the catalog
    pub slug: String,

    /// Long description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub in_stock: u32,

    /// Free-form search tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Target audience
    pub gender: Gender,

    /// Owning category
    pub category_id: CategoryId,

    /// Sizes this product is offered in
    #[serde(default)]
    pub sizes: BTreeSet<Size>,

    /// Images already stored for this product
    #[serde(default)]
    pub images: Vec<PersistedImage>,
}

impl Product {
    /// Create an unsaved product with the given title and category
    pub fn new(title: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id: None,
            title: title.into(),
            slug: String::new(),
            description: String::new(),
            price: 0.0,
            in_stock: 0,
            tags: Vec::new(),
            gender: Gender::Unisex,
            category_id,
            sizes: BTreeSet::new(),
            images: Vec::new(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the identifier
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the slug
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set price and stock
    pub fn with_price(mut self, price: f64, in_stock: u32) -> Self {
        self.price = price;
        self.in_stock = in_stock;
        self
    }

    /// Set the gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a size
    pub fn with_size(mut self, size: Size) -> Self {
        self.sizes.insert(size);
        self
    }

    /// Attach a stored image
    pub fn with_image(mut self, image: PersistedImage) -> Self {
        self.images.push(image);
        self
    }

    /// Check if this product has been stored
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

// ============================================================================
// Persisted Image
// ============================================================================

/// An image already stored and associated with a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedImage {
    /// Identifier used for deletion
    pub id: ImageId,

    /// Absolute URL, or a file name relative to the storage prefix
    pub url: String,
}

impl PersistedImage {
    /// Create a new image record with a fresh id
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Category
// ============================================================================

/// A product category as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Create a new category with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_is_draft() {
        let category = Category::new("Shirts");
        let product = Product::new("Shirt", category.id);
        assert!(!product.is_persisted());
        assert!(product.sizes.is_empty());
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_builder_deduplicates_sizes() {
        let product = Product::new("Shirt", Uuid::new_v4())
            .with_size(Size::Medium)
            .with_size(Size::Small)
            .with_size(Size::Medium);
        let sizes: Vec<Size> = product.sizes.iter().copied().collect();
        assert_eq!(sizes, vec![Size::Small, Size::Medium]);
    }

    #[test]
    fn test_product_json_field_names() {
        let product = Product::new("Shirt", Uuid::nil())
            .with_slug("shirt")
            .with_price(10.0, 5)
            .with_gender(Gender::Men);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["inStock"], 5);
        assert_eq!(json["gender"], "men");
        assert!(json.get("categoryId").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_product_json_defaults() {
        let json = r#"{
            "title": "Cap",
            "slug": "cap",
            "description": "A cap",
            "price": 4.5,
            "inStock": 1,
            "gender": "kid",
            "categoryId": "00000000-0000-0000-0000-000000000000"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.tags.is_empty());
        assert!(product.sizes.is_empty());
        assert_eq!(product.gender, Gender::Kid);
    }
}
