//! Application State Management for Catalog Admin
//!
//! Centralized state using Dioxus 0.7 Signals: the current route with its
//! navigation history, the status bar message and the blocking alert.
//! The backend and storage settings are shared separately through
//! [`CatalogServices`] as a root context.

use catalog_form::{EditorShell, Route};
use catalog_model::{CatalogBackend, DEFAULT_STORAGE_PREFIX};
use dioxus::prelude::*;
use std::sync::Arc;

// ============================================================================
// Services
// ============================================================================

/// Backend handle and settings shared with every page
#[derive(Clone)]
pub struct CatalogServices {
    pub backend: Arc<dyn CatalogBackend>,
    /// Prefix for relative image URLs
    pub storage_prefix: String,
}

impl CatalogServices {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self {
            backend,
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }

    pub fn with_storage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage_prefix = prefix.into();
        self
    }
}

impl std::fmt::Debug for CatalogServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServices")
            .field("storage_prefix", &self.storage_prefix)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Navigation History
// ============================================================================

/// Back stack of visited routes
#[derive(Debug, Clone, PartialEq)]
pub struct NavHistory {
    past: Vec<Route>,
    max_size: usize,
}

impl Default for NavHistory {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            max_size: 50,
        }
    }
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a route we are leaving
    pub fn push(&mut self, route: Route) {
        self.past.push(route);
        if self.past.len() > self.max_size {
            self.past.remove(0);
        }
    }

    /// Take the most recently left route
    pub fn pop(&mut self) -> Option<Route> {
        self.past.pop()
    }

    pub fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (status bar, alert, theme)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Blocking notification, dismissed by the operator
    pub alert: Option<String>,
    /// Whether dark mode is enabled
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status_message: None,
            alert: None,
            dark_mode: true,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Show a blocking alert
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Dismiss the alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current location
    pub route: Route,
    /// Routes to return to
    pub history: NavHistory,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Go to a route, remembering the current one
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!("Navigate {} -> {}", self.route, route);
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
    }

    /// Go to a route without adding a history entry
    pub fn replace(&mut self, route: Route) {
        tracing::debug!("Replace {} -> {}", self.route, route);
        self.route = route;
    }

    /// Return to the previous route
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!("Back {} -> {}", self.route, previous);
                self.route = previous;
                true
            }
            None => false,
        }
    }
}

impl EditorShell for AppState {
    fn replace_route(&mut self, route: Route) {
        self.replace(route);
        self.ui.set_status("Product saved", StatusLevel::Success);
    }

    fn alert(&mut self, message: &str) {
        self.ui.show_alert(message);
        self.ui.set_status(message, StatusLevel::Error);
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Hook to access the current route
pub fn use_current_route() -> Route {
    APP_STATE.read().route.clone()
}

/// Hook to access the shared backend and settings
pub fn use_services() -> CatalogServices {
    use_context::<CatalogServices>()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_form::SAVE_FAILED_MESSAGE;

    #[test]
    fn test_navigate_and_back() {
        let mut state = AppState::new();
        assert_eq!(state.route, Route::ProductList);

        state.navigate(Route::new_product());
        state.navigate(Route::edit("shirt"));
        assert_eq!(state.history.len(), 2);

        assert!(state.back());
        assert_eq!(state.route, Route::new_product());
        assert!(state.back());
        assert_eq!(state.route, Route::ProductList);
        assert!(!state.back());
    }

    #[test]
    fn test_navigate_to_current_route_is_noop() {
        let mut state = AppState::new();
        state.navigate(Route::ProductList);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_replace_keeps_history() {
        let mut state = AppState::new();
        state.navigate(Route::new_product());
        state.replace(Route::edit("shirt"));

        assert_eq!(state.route, Route::edit("shirt"));
        assert_eq!(state.history.len(), 1);
        assert!(state.back());
        assert_eq!(state.route, Route::ProductList);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = NavHistory::new();
        for i in 0..60 {
            history.push(Route::edit(format!("p{}", i)));
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.pop(), Some(Route::edit("p59")));
    }

    #[test]
    fn test_shell_success_replaces_route() {
        let mut state = AppState::new();
        state.navigate(Route::new_product());

        let shell: &mut dyn EditorShell = &mut state;
        shell.replace_route(Route::edit("shirt"));

        assert_eq!(state.route, Route::edit("shirt"));
        assert_eq!(state.history.len(), 1);
        assert!(state.ui.alert.is_none());
    }

    #[test]
    fn test_shell_alert_blocks_until_dismissed() {
        let mut state = AppState::new();
        state.alert(SAVE_FAILED_MESSAGE);
        assert_eq!(state.ui.alert.as_deref(), Some(SAVE_FAILED_MESSAGE));
        assert_eq!(
            state.ui.status_message.as_ref().map(|m| m.level),
            Some(StatusLevel::Error)
        );

        state.ui.dismiss_alert();
        assert!(state.ui.alert.is_none());
    }
}
