//! Submission controller
//!
//! Drives one save attempt from the submit click to the shell reaction:
//!
//! ```text
//! Idle -> Validating -> Submitting -> Succeeded | Failed -> Idle
//! ```
//!
//! The controller is split into [`SubmissionController::begin`] and
//! [`SubmissionController::complete`] so a UI can release its state
//! borrows while the backend call is in flight. [`SubmissionController::submit`]
//! runs both halves around the backend call for callers that can hold the
//! controller across an await.
//!
//! The controller never writes to the form. After a failure every value the
//! operator entered is still there to retry with.

use crate::payload::build_payload;
use crate::route::Route;
use crate::state::{FormField, ProductForm};
use catalog_core::{CatalogError, CatalogResult};
use catalog_model::{CatalogBackend, Product, ProductPayload, SaveResponse};

/// Message shown when the backend rejects or fails a save
pub const SAVE_FAILED_MESSAGE: &str = "The product could not be updated";

// ============================================================================
// Shell
// ============================================================================

/// Navigation and notification surface the controller reacts through
pub trait EditorShell {
    /// Replace the current location without adding a history entry
    fn replace_route(&mut self, route: Route);

    /// Show a blocking notification
    fn alert(&mut self, message: &str);
}

// ============================================================================
// Phases
// ============================================================================

/// Where a save attempt currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Get display name for the phase
    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Idle",
            SubmissionPhase::Validating => "Validating",
            SubmissionPhase::Submitting => "Saving...",
            SubmissionPhase::Succeeded => "Saved",
            SubmissionPhase::Failed => "Failed",
        }
    }
}

/// Result of a save attempt as seen by the page
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stored; the shell was sent to the product's edit route
    Saved(Product),
    /// Rejected or failed; the shell was alerted
    Failed(CatalogError),
    /// Required fields are empty; nothing was sent
    Incomplete(Vec<FormField>),
    /// A save was already in flight
    Ignored,
}

// ============================================================================
// Controller
// ============================================================================

/// State machine for save attempts of one editing session
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
    attempts: u32,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Check if a save is in flight
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Number of payloads handed to the backend so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Validate the form and produce the payload to send
    ///
    /// Fails with [`CatalogError::SubmissionInProgress`] while another save
    /// is in flight, and with [`CatalogError::ValidationIncomplete`] when
    /// required fields are empty. Both leave the controller ready for the
    /// next attempt; on success it stays in `Submitting` until
    /// [`complete`](Self::complete) is called.
    pub fn begin(&mut self, form: &ProductForm) -> CatalogResult<ProductPayload> {
        if self.is_submitting() {
            tracing::warn!("Submit ignored, a save is already in flight");
            return Err(CatalogError::SubmissionInProgress);
        }

        self.transition(SubmissionPhase::Validating);
        let missing = form.missing_required();
        if !missing.is_empty() {
            self.transition(SubmissionPhase::Idle);
            return Err(CatalogError::incomplete(missing.iter().map(FormField::key)));
        }

        let payload = build_payload(form);
        self.attempts += 1;
        self.transition(SubmissionPhase::Submitting);
        Ok(payload)
    }

    /// React to the backend's answer
    pub fn complete(
        &mut self,
        result: CatalogResult<SaveResponse>,
        shell: &mut dyn EditorShell,
    ) -> SubmitOutcome {
        if !self.is_submitting() {
            tracing::warn!("Completing a save that was not started ({:?})", self.phase);
        }

        let outcome = match result {
            Ok(SaveResponse {
                ok: true,
                product: Some(product),
            }) => {
                self.transition(SubmissionPhase::Succeeded);
                tracing::info!("Product '{}' saved", product.slug);
                shell.replace_route(Route::edit(product.slug.clone()));
                SubmitOutcome::Saved(product)
            }
            Ok(response) => {
                let reason = if response.ok {
                    "backend returned no product"
                } else {
                    "backend rejected the product"
                };
                self.fail(CatalogError::persistence(reason), shell)
            }
            Err(e) if e.is_persistence() => self.fail(e, shell),
            Err(e) => self.fail(CatalogError::persistence(e.to_string()), shell),
        };

        self.transition(SubmissionPhase::Idle);
        outcome
    }

    /// Run a full save attempt against a backend
    pub async fn submit(
        &mut self,
        form: &ProductForm,
        backend: &dyn CatalogBackend,
        shell: &mut dyn EditorShell,
    ) -> SubmitOutcome {
        let payload = match self.begin(form) {
            Ok(payload) => payload,
            Err(CatalogError::SubmissionInProgress) => return SubmitOutcome::Ignored,
            Err(_) => return SubmitOutcome::Incomplete(form.missing_required()),
        };

        let result = backend.save_product(payload).await;
        self.complete(result, shell)
    }

    fn fail(&mut self, error: CatalogError, shell: &mut dyn EditorShell) -> SubmitOutcome {
        self.transition(SubmissionPhase::Failed);
        tracing::error!("Save failed: {}", error);
        shell.alert(SAVE_FAILED_MESSAGE);
        SubmitOutcome::Failed(error)
    }

    fn transition(&mut self, next: SubmissionPhase) {
        tracing::debug!("Submission {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

// ============================================================================
// Tests
// ============================================================================
