//! Catalog Admin
//!
//! Desktop product editor for the shop catalog.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use catalog_model::{Category, InMemoryCatalog, load_snapshot};
use catalog_ui::AdminConfig;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Categories offered when no seed file is configured
const DEFAULT_CATEGORIES: &[&str] = &["Shirts", "Pants", "Hoodies", "Hats"];

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    println!();
    println!("  Catalog Admin v{}", catalog_ui::VERSION);
    println!("  Product editor for the shop catalog");
    println!();

    let config = AdminConfig::load().context("failed to load configuration")?;
    let catalog = build_catalog(&config)?;

    catalog_ui::launch(config, Arc::new(catalog));
    Ok(())
}

/// Build the in-memory backend, seeded from the configured snapshot
fn build_catalog(config: &AdminConfig) -> anyhow::Result<InMemoryCatalog> {
    match &config.seed_file {
        Some(path) => {
            let snapshot = load_snapshot(path)
                .with_context(|| format!("failed to load seed file {}", path.display()))?;
            tracing::info!(
                "Seeded catalog with {} categories and {} products",
                snapshot.categories.len(),
                snapshot.products.len()
            );
            Ok(InMemoryCatalog::from_snapshot(snapshot))
        }
        None => {
            let categories = DEFAULT_CATEGORIES
                .iter()
                .map(|name| Category::new(*name))
                .collect();
            Ok(InMemoryCatalog::with_categories(categories))
        }
    }
}
