//! Product List Page
//!
//! Catalog overview: every product with its stock and price, a link to
//! each edit page and an entry point for creating a new product. Stale
//! edit links land here.

use catalog_form::Route;
use catalog_model::{CatalogSnapshot, Product};
use dioxus::prelude::*;

use crate::file_ops;
use crate::state::{APP_STATE, StatusLevel, use_services};

/// Product listing page
#[component]
pub fn ProductListPage() -> Element {
    let services = use_services();

    let products = use_resource({
        let backend = services.backend.clone();
        move || {
            let backend = backend.clone();
            async move { backend.products().await }
        }
    });

    let on_export = {
        let backend = services.backend.clone();
        move |_| {
            let backend = backend.clone();
            spawn(async move {
                let snapshot = match (backend.categories().await, backend.products().await) {
                    (Ok(categories), Ok(products)) => CatalogSnapshot::new(categories, products),
                    (Err(e), _) | (_, Err(e)) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status(format!("Failed to export: {}", e), StatusLevel::Error);
                        return;
                    }
                };

                match file_ops::export_snapshot(&snapshot, None).await {
                    Ok(path) => APP_STATE.write().ui.set_status(
                        format!("Catalog exported to {}", path.display()),
                        StatusLevel::Success,
                    ),
                    Err(catalog_core::CatalogError::Cancelled) => {
                        tracing::debug!("Export cancelled by user");
                    }
                    Err(e) => {
                        tracing::error!("Failed to export catalog: {}", e);
                        APP_STATE
                            .write()
                            .ui
                            .set_status(format!("Failed to export: {}", e), StatusLevel::Error);
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "p-8 max-w-5xl",

            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold", "Products" }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                        onclick: on_export,
                        "Export"
                    }
                    button {
                        class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded transition-colors",
                        onclick: move |_| APP_STATE.write().navigate(Route::new_product()),
                        "New product"
                    }
                }
            }

            match &*products.read() {
                None => rsx! { p { class: "text-slate-400", "Loading..." } },
                Some(Err(e)) => rsx! { p { class: "text-rose-400", "Failed to load products: {e}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "text-slate-400", "No products yet" }
                },
                Some(Ok(list)) => rsx! {
                    table {
                        class: "w-full text-sm",
                        thead {
                            tr {
                                class: "text-left text-slate-400 border-b border-slate-700",
                                th { class: "py-2", "Title" }
                                th { class: "py-2", "Gender" }
                                th { class: "py-2 text-right", "Stock" }
                                th { class: "py-2 text-right", "Price" }
                            }
                        }
                        tbody {
                            for product in list.iter().cloned() {
                                ProductRow { key: "{product.slug}", product }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// One listing row, linking to the edit page
#[component]
fn ProductRow(product: Product) -> Element {
    let slug = product.slug.clone();
    let price = format_price(product.price);

    rsx! {
        tr {
            class: "border-b border-slate-800 hover:bg-slate-800 cursor-pointer",
            onclick: move |_| APP_STATE.write().navigate(Route::edit(slug.clone())),
            td { class: "py-2", "{product.title}" }
            td { class: "py-2", "{product.gender.display_name()}" }
            td { class: "py-2 text-right", "{product.in_stock}" }
            td { class: "py-2 text-right", "{price}" }
        }
    }
}

/// Format a price for the listing
fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
