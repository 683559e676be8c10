//! # UI Components
//!
//! Reusable Dioxus components for the product editor.
//!
//! ## Component Hierarchy
//!
//! ```text
//! ProductEditPage
//! ├── TextInput / TextArea / NumberInput / Select
//! ├── SizeSelector
//! └── ImageGallery
//! ```

pub mod image_gallery;
pub mod inputs;
pub mod size_selector;

pub use image_gallery::ImageGallery;
pub use inputs::{NumberInput, Select, SelectOption, TextArea, TextInput};
pub use size_selector::SizeSelector;
