//! # Catalog Form
//!
//! State and submission engine of the product edit form.
//!
//! ## Flow
//!
//! 1. [`page::load_editor`] resolves a slug into an [`EditorSession`]
//! 2. Input events mutate the session's [`ProductForm`]
//! 3. [`SubmissionController::begin`] validates and builds the payload
//! 4. The payload goes to [`catalog_model::CatalogBackend::save_product`]
//! 5. [`SubmissionController::complete`] navigates or alerts through an
//!    [`EditorShell`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use catalog_form::{FormField, ProductForm, SubmissionController};
//!
//! let mut form = ProductForm::blank();
//! form.set(FormField::Title, "Shirt");
//! form.toggle_size(Size::Medium);
//!
//! let outcome = SubmissionController::new()
//!     .submit(&form, backend.as_ref(), &mut shell)
//!     .await;
//! ```

pub mod gallery;
pub mod page;
pub mod payload;
pub mod route;
pub mod state;
pub mod submit;

pub use gallery::{GalleryItem, delete_image, gallery_items};
pub use page::{EDIT_PRODUCT_TITLE, EditorLoad, EditorSession, NEW_PRODUCT_TITLE, load_editor};
pub use payload::build_payload;
pub use route::{NEW_PRODUCT_SLUG, Route};
pub use state::{FieldValue, FormField, ProductForm, REQUIRED_FIELDS};
pub use submit::{
    EditorShell, SAVE_FAILED_MESSAGE, SubmissionController, SubmissionPhase, SubmitOutcome,
};
