//! The in-progress booking record for the current session

use serde::{Deserialize, Serialize};

use crate::catalog::{KitItem, Religion, Service};

/// Contact details collected in the fourth step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl PersonalInfo {
    /// All three fields are filled in (whitespace-only counts as empty)
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

/// The mutable booking aggregate. Created empty once per session and mutated
/// only through [`crate::booking::BookingSession`] operations; presentation
/// code never writes to it directly.
///
/// Selected items are stored as owned catalog values so composition stays a
/// pure function of the draft. Membership is by id; insertion order is kept
/// for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    pub religion: Option<Religion>,
    #[serde(default)]
    pub selected_kit_items: Vec<KitItem>,
    #[serde(default)]
    pub selected_services: Vec<Service>,
    #[serde(default)]
    pub personal_info: PersonalInfo,
}

impl BookingDraft {
    pub fn has_kit_item(&self, id: &str) -> bool {
        self.selected_kit_items.iter().any(|i| i.id == id)
    }

    pub fn has_service(&self, id: &str) -> bool {
        self.selected_services.iter().any(|s| s.id == id)
    }
}
