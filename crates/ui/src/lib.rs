//! # Catalog UI
//!
//! Dioxus Desktop UI for Catalog Admin.
//!
//! ## Features
//!
//! - Product listing with links to each edit page
//! - Product edit form with size selector, photo attachments and gallery
//! - Save feedback through navigation or a blocking alert
//! - Catalog snapshot export
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod file_ops;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog_form;
pub use catalog_model;

pub use app::App;
pub use config::{AdminConfig, WindowConfig};
pub use pages::{ProductEditPage, ProductListPage};
pub use state::{
    APP_STATE, AppState, CatalogServices, NavHistory, StatusLevel, StatusMessage, UiState,
};

use catalog_model::CatalogBackend;
use std::sync::Arc;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Catalog Admin";

/// Application display title
pub const TITLE: &str = "Catalog Admin - Product Editor";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Catalog Admin desktop application
///
/// # Example
///
/// ```rust,ignore
/// let backend = Arc::new(InMemoryCatalog::new());
/// catalog_ui::launch(AdminConfig::default(), backend);
/// ```
pub fn launch(config: AdminConfig, backend: Arc<dyn CatalogBackend>) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let services = CatalogServices::new(backend).with_storage_prefix(config.storage_prefix.clone());
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(config.window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(services)
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains(NAME));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(STYLES.contains(".app-container"));
    }
}
