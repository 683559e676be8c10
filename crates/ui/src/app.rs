//! Main Application Component for Catalog Admin
//!
//! Root Dioxus component: toolbar, the page for the current route, the
//! status bar and the blocking alert overlay.

use catalog_form::Route;
use dioxus::prelude::*;

use crate::pages::{ProductEditPage, ProductListPage};
use crate::state::{APP_STATE, StatusLevel, use_current_route};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Catalog Admin UI initialized");
    });

    let dark_mode = APP_STATE.read().ui.dark_mode;
    let theme = if dark_mode {
        "bg-slate-900 text-slate-100"
    } else {
        "bg-slate-100 text-slate-900"
    };

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col overflow-hidden {theme}",

            Toolbar {}
            MainContent {}
            StatusBar {}
            AlertOverlay {}
        }
    }
}

// ============================================================================
// Toolbar Component
// ============================================================================

/// Top toolbar with navigation actions
#[component]
fn Toolbar() -> Element {
    let state = APP_STATE.read();
    let can_go_back = state.history.can_go_back();
    let route = state.route.clone();
    drop(state);

    rsx! {
        header {
            class: "toolbar h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2 mr-4",
                span { class: "font-semibold text-sm", "Catalog Admin" }
            }

            ToolbarButton {
                label: "Back",
                disabled: !can_go_back,
                onclick: move |_| {
                    APP_STATE.write().back();
                }
            }

            ToolbarButton {
                label: "Products",
                disabled: route == Route::ProductList,
                onclick: move |_| APP_STATE.write().navigate(Route::ProductList)
            }

            ToolbarButton {
                label: "New product",
                disabled: route == Route::new_product(),
                onclick: move |_| APP_STATE.write().navigate(Route::new_product())
            }

            div { class: "flex-1" }

            span { class: "text-xs text-slate-500", "{route.path()}" }

            ToolbarButton {
                label: "Theme",
                onclick: move |_| APP_STATE.write().ui.toggle_dark_mode()
            }
        }
    }
}

/// Toolbar button component
#[component]
fn ToolbarButton(
    label: &'static str,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "hover:bg-slate-700 cursor-pointer"
    };

    rsx! {
        button {
            class: "px-2 py-1 rounded text-sm transition-colors {state_class}",
            disabled: disabled,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            "{label}"
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the page for the current route
#[component]
fn MainContent() -> Element {
    let route = use_current_route();

    rsx! {
        main {
            class: "flex-1 overflow-auto",

            match route {
                Route::ProductList => rsx! { ProductListPage {} },
                // Keyed by slug so a new slug mounts a fresh editing session.
                Route::ProductEdit { slug } => rsx! {
                    ProductEditPage { key: "{slug}", slug: slug.clone() }
                },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let status = APP_STATE.read().ui.status_message.clone();

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center px-4 text-xs text-slate-400 shrink-0",

            if let Some(msg) = status {
                span {
                    class: status_class(msg.level),
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }
        }
    }
}

/// Text color for a status level
fn status_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "text-slate-400",
        StatusLevel::Success => "text-green-400",
        StatusLevel::Warning => "text-amber-400",
        StatusLevel::Error => "text-red-400",
    }
}

// ============================================================================
// Alert Overlay Component
// ============================================================================

/// Blocking alert, dismissed with its button
#[component]
fn AlertOverlay() -> Element {
    let Some(message) = APP_STATE.read().ui.alert.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",

            div { class: "absolute inset-0 bg-black/50" }

            div {
                class: "relative bg-slate-800 rounded-lg shadow-xl border border-slate-700 mx-4 max-w-md w-full p-6",
                role: "alertdialog",

                div {
                    class: "flex items-start gap-3 mb-4",
                    span { class: "text-2xl", "!" }
                    p { class: "text-slate-200 mt-1", "{message}" }
                }

                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                        autofocus: true,
                        onclick: move |_| APP_STATE.write().ui.dismiss_alert(),
                        "OK"
                    }
                }
            }
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
    fn test_status_class() {
        assert_eq!(status_class(StatusLevel::Error), "text-red-400");
        assert_eq!(status_class(StatusLevel::Success), "text-green-400");
    }
}
