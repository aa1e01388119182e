//! Booking core: draft, selection rules, step machine, order composition

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::{Catalog, KitItem, Service};

pub mod draft;
pub mod engine;
pub mod order;
pub mod steps;

pub use draft::{BookingDraft, PersonalInfo};
pub use order::{compose, OrderComposition};
pub use steps::{BookingStep, StepController};

use engine::SelectionEngine;

/// The one owner of the booking draft for a session. All mutation goes
/// through these methods; the UI layer only reads the draft.
pub struct BookingSession {
    catalog: Arc<Catalog>,
    draft: BookingDraft,
    controller: StepController,
}

impl BookingSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            draft: BookingDraft::default(),
            controller: StepController::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn step(&self) -> BookingStep {
        self.controller.current()
    }

    // ─── Selection operations ───────────────────────────────────────────────

    pub fn select_religion(&mut self, religion_id: &str) {
        SelectionEngine::new(&self.catalog).select_religion(&mut self.draft, religion_id);
    }

    pub fn toggle_kit_item(&mut self, item: &KitItem) {
        SelectionEngine::new(&self.catalog).toggle_kit_item(&mut self.draft, item);
    }

    pub fn toggle_service(&mut self, service: &Service) {
        SelectionEngine::new(&self.catalog).toggle_service(&mut self.draft, service);
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) {
        SelectionEngine::new(&self.catalog).set_personal_info(&mut self.draft, info);
    }

    // ─── Step transitions ───────────────────────────────────────────────────

    pub fn can_advance(&self) -> bool {
        self.controller.can_advance(&self.draft)
    }

    pub fn advance(&mut self) -> BookingStep {
        self.controller.advance(&self.draft)
    }

    pub fn retreat(&mut self) -> BookingStep {
        self.controller.retreat()
    }

    pub fn can_submit(&self) -> bool {
        self.controller.can_submit()
    }

    /// Terminal transition to Confirmation, fired by the gateway's
    /// completion path
    pub fn complete_submission(&mut self) {
        self.controller.complete_submission();
    }

    // ─── Composition ────────────────────────────────────────────────────────

    pub fn compose(&self) -> Result<OrderComposition> {
        order::compose(&self.draft)
    }
}
