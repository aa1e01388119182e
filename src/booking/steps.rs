//! Linear step state machine for the booking wizard

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::booking::draft::BookingDraft;

/// The six ordered wizard steps. `Confirmation` is terminal and reachable
/// only through submission, never by forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStep {
    ReligionSelection,
    KitSelection,
    ServiceSelection,
    ContactInfo,
    Review,
    Confirmation,
}

impl BookingStep {
    /// All steps in wizard order
    pub fn all() -> &'static [BookingStep] {
        &[
            BookingStep::ReligionSelection,
            BookingStep::KitSelection,
            BookingStep::ServiceSelection,
            BookingStep::ContactInfo,
            BookingStep::Review,
            BookingStep::Confirmation,
        ]
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|s| *s == self).unwrap_or(0)
    }

    fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStep::ReligionSelection => "Religion",
            BookingStep::KitSelection => "Kit Items",
            BookingStep::ServiceSelection => "Services",
            BookingStep::ContactInfo => "Contact Info",
            BookingStep::Review => "Review",
            BookingStep::Confirmation => "Confirmation",
        }
    }
}

/// Gates progression through the steps against the current draft. Holds no
/// draft data itself; retreat never loses selections.
#[derive(Debug, Clone)]
pub struct StepController {
    current: BookingStep,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: BookingStep::ReligionSelection,
        }
    }

    pub fn current(&self) -> BookingStep {
        self.current
    }

    /// Whether forward progression is allowed from the current step.
    /// Review and Confirmation have no `advance` transition at all.
    pub fn can_advance(&self, draft: &BookingDraft) -> bool {
        match self.current {
            BookingStep::ReligionSelection => draft.religion.is_some(),
            BookingStep::KitSelection => !draft.selected_kit_items.is_empty(),
            BookingStep::ServiceSelection => true,
            BookingStep::ContactInfo => draft.personal_info.is_complete(),
            BookingStep::Review | BookingStep::Confirmation => false,
        }
    }

    /// Move one step forward if the gate allows it. Returns the step after
    /// the call.
    pub fn advance(&mut self, draft: &BookingDraft) -> BookingStep {
        if self.can_advance(draft) {
            if let Some(next) = BookingStep::from_index(self.current.index() + 1) {
                debug!(from = ?self.current, to = ?next, "Step advance");
                self.current = next;
            }
        }
        self.current
    }

    /// Move one step back. Always allowed except from the first step and
    /// the terminal step.
    pub fn retreat(&mut self) -> BookingStep {
        let index = self.current.index();
        if index > 0 && self.current != BookingStep::Confirmation {
            if let Some(prev) = BookingStep::from_index(index - 1) {
                debug!(from = ?self.current, to = ?prev, "Step retreat");
                self.current = prev;
            }
        }
        self.current
    }

    /// Whether submission is available (Review step only)
    pub fn can_submit(&self) -> bool {
        self.current == BookingStep::Review
    }

    /// Enter the terminal Confirmation step. Called by the gateway's
    /// completion path, never by forward navigation. No-op off Review.
    pub fn complete_submission(&mut self) {
        if self.current == BookingStep::Review {
            debug!("Submission complete, entering confirmation");
            self.current = BookingStep::Confirmation;
        }
    }
}
