//! Editor routes

/// Slug that addresses the create view
pub const NEW_PRODUCT_SLUG: &str = "new";

/// A location inside the admin editor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Product listing, also the target of stale-slug redirects
    #[default]
    ProductList,
    /// Edit view addressed by product slug (`new` for create)
    ProductEdit { slug: String },
}

impl Route {
    /// Edit view for a product
    pub fn edit(slug: impl Into<String>) -> Self {
        Route::ProductEdit { slug: slug.into() }
    }

    /// Create view
    pub fn new_product() -> Self {
        Self::edit(NEW_PRODUCT_SLUG)
    }

    /// Path form of the route
    pub fn path(&self) -> String {
        match self {
            Route::ProductList => "/admin/products".to_string(),
            Route::ProductEdit { slug } => format!("/admin/product/{}", slug),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
