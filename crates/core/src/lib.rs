//! # Catalog Core
//!
//! Core types, traits, and error handling for Catalog Admin.
//!
//! - **Types**: identifier aliases and the `Gender` / `Size` enumerations
//! - **Traits**: `Validatable` and `Persistable`
//! - **Errors**: unified error handling with `CatalogError` and `CatalogResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{CatalogError, CatalogResult};
pub use traits::{Persistable, Validatable};
pub use types::{CategoryId, Gender, ImageId, ProductId, Size};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
