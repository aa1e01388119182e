//! Selection rules over the booking draft
//!
//! Every operation is total: invalid input (unknown religion, foreign or
//! required kit item, missing religion) is a logged no-op rather than an
//! error, since it can only come from a misbehaving caller, not the user.

use tracing::{debug, warn};

use crate::booking::draft::{BookingDraft, PersonalInfo};
use crate::catalog::{Catalog, Kit, KitItem, Service};

/// Applies selection operations to a draft while holding the invariants:
/// kit items always belong to the selected religion's kit, required items
/// are present whenever a religion is selected, and required items cannot
/// be toggled off.
pub struct SelectionEngine<'c> {
    catalog: &'c Catalog,
}

impl<'c> SelectionEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Set the religion and replace the kit selection with exactly the
    /// required subset of the new religion's kit. This is a full reset, not
    /// a merge; re-selecting the same religion resets optional items too.
    pub fn select_religion(&self, draft: &mut BookingDraft, religion_id: &str) {
        let Some(religion) = self.catalog.religion(religion_id) else {
            warn!(religion_id, "Ignoring selection of unknown religion");
            return;
        };

        draft.religion = Some(religion.clone());
        draft.selected_kit_items = self
            .catalog
            .kit_for(religion_id)
            .map(Kit::required_items)
            .unwrap_or_default();

        debug!(
            religion_id,
            required = draft.selected_kit_items.len(),
            "Religion selected, kit reset to required items"
        );
    }

    /// Flip membership of an optional kit item. Required items, items from
    /// another religion's kit, and toggles with no religion selected are
    /// ignored.
    pub fn toggle_kit_item(&self, draft: &mut BookingDraft, item: &KitItem) {
        if item.required {
            return;
        }

        let Some(religion) = draft.religion.as_ref() else {
            warn!(item = %item.id, "Ignoring kit toggle with no religion selected");
            return;
        };

        let belongs = self
            .catalog
            .kit_for(&religion.id)
            .is_some_and(|kit| kit.items.iter().any(|i| i.id == item.id));
        if !belongs {
            warn!(item = %item.id, religion = %religion.id, "Ignoring kit item outside the selected kit");
            return;
        }

        if draft.has_kit_item(&item.id) {
            draft.selected_kit_items.retain(|i| i.id != item.id);
        } else {
            draft.selected_kit_items.push(item.clone());
        }
    }

    /// Flip membership of a service. All services are optional and unscoped.
    pub fn toggle_service(&self, draft: &mut BookingDraft, service: &Service) {
        if draft.has_service(&service.id) {
            draft.selected_services.retain(|s| s.id != service.id);
        } else {
            draft.selected_services.push(service.clone());
        }
    }

    /// Full replacement of the contact details
    pub fn set_personal_info(&self, draft: &mut BookingDraft, info: PersonalInfo) {
        draft.personal_info = info;
    }
}
