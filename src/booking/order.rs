//! Order composition: totals and the outbound WhatsApp message
//!
//! `compose` is deterministic and side-effect free; the composition is
//! recomputed from the draft on demand and never cached.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

use crate::booking::draft::BookingDraft;

/// Plain-text message layout. Section blocks for kit items and services are
/// omitted entirely when the corresponding selection is empty.
const MESSAGE_TEMPLATE: &str = "\
🙏 *LAST RITES SERVICE BOOKING REQUEST*

👤 *Personal Details:*
Name: {{name}}
Phone: {{phone}}
Address: {{address}}

🕉️ *Religion:* {{religion}}

{{#if kit_items}}
📦 *Selected Kit Items:*
{{#each kit_items}}
• {{name}} - ₹{{price}}
{{/each}}
*Kit Subtotal: ₹{{kit_subtotal}}*

{{/if}}
{{#if services}}
🔧 *Additional Services:*
{{#each services}}
• {{name}} - ₹{{price}}{{#if duration}} ({{duration}}){{/if}}
{{/each}}
*Services Subtotal: ₹{{services_subtotal}}*

{{/if}}
💰 *GRAND TOTAL: ₹{{grand_total}}*

Please confirm this booking and provide further instructions. Thank you.";

static RENDERER: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut handlebars = Handlebars::new();
    // The message is plain text for a chat channel, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(false);
    handlebars
});

/// Derived order totals plus the rendered outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderComposition {
    pub kit_subtotal: u64,
    pub services_subtotal: u64,
    pub grand_total: u64,
    pub message: String,
}

impl OrderComposition {
    /// The message percent-encoded for use as a URL query component
    pub fn encoded_message(&self) -> String {
        urlencoding::encode(&self.message).into_owned()
    }
}

/// Compute subtotals and render the order message from the current draft
pub fn compose(draft: &BookingDraft) -> Result<OrderComposition> {
    let kit_subtotal: u64 = draft.selected_kit_items.iter().map(|i| i.price).sum();
    let services_subtotal: u64 = draft.selected_services.iter().map(|s| s.price).sum();
    let grand_total = kit_subtotal + services_subtotal;

    let context = json!({
        "name": draft.personal_info.name,
        "phone": draft.personal_info.phone,
        "address": draft.personal_info.address,
        "religion": draft.religion.as_ref().map(|r| r.name.as_str()).unwrap_or(""),
        "kit_items": draft.selected_kit_items.iter().map(|i| json!({
            "name": i.name,
            "price": i.price,
        })).collect::<Vec<_>>(),
        "services": draft.selected_services.iter().map(|s| json!({
            "name": s.name,
            "price": s.price,
            "duration": s.duration,
        })).collect::<Vec<_>>(),
        "kit_subtotal": kit_subtotal,
        "services_subtotal": services_subtotal,
        "grand_total": grand_total,
    });

    let message = RENDERER
        .render_template(MESSAGE_TEMPLATE, &context)
        .context("Failed to render order message")?;

    Ok(OrderComposition {
        kit_subtotal,
        services_subtotal,
        grand_total,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::draft::PersonalInfo;
    use crate::catalog::{KitItem, Religion, Service};

    fn kit_item(id: &str, name: &str, price: u64, required: bool) -> KitItem {
        KitItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            required,
        }
    }

    fn draft() -> BookingDraft {
        BookingDraft {
            religion: Some(Religion {
                id: "hindu".to_string(),
                name: "Hindu".to_string(),
                icon: "🕉️".to_string(),
            }),
            selected_kit_items: vec![
                kit_item("shroud", "White Cotton Shroud", 500, true),
                kit_item("ghee", "Pure Cow Ghee", 300, true),
            ],
            selected_services: vec![],
            personal_info: PersonalInfo {
                name: "Ravi Kumar".to_string(),
                address: "12 Civil Lines, Agra".to_string(),
                phone: "9876543210".to_string(),
            },
        }
    }

    #[test]
    fn totals_are_sums_of_constituent_prices() {
        let mut d = draft();
        d.selected_kit_items
            .push(kit_item("sandalwood", "Sandalwood Sticks", 200, false));
        d.selected_services.push(Service {
            id: "priest".to_string(),
            name: "Hindu Pandit Service".to_string(),
            description: String::new(),
            price: 2500,
            duration: Some("3-4 hours".to_string()),
        });

        let composition = compose(&d).unwrap();
        assert_eq!(composition.kit_subtotal, 1000);
        assert_eq!(composition.services_subtotal, 2500);
        assert_eq!(composition.grand_total, 3500);
    }

    #[test]
    fn message_contains_fixed_sections_in_order() {
        let composition = compose(&draft()).unwrap();
        let message = &composition.message;

        let banner = message.find("LAST RITES SERVICE BOOKING REQUEST").unwrap();
        let details = message.find("*Personal Details:*").unwrap();
        let religion = message.find("*Religion:* Hindu").unwrap();
        let kit = message.find("*Selected Kit Items:*").unwrap();
        let total = message.find("*GRAND TOTAL: ₹800*").unwrap();
        let closing = message.find("Please confirm this booking").unwrap();

        assert!(banner < details);
        assert!(details < religion);
        assert!(religion < kit);
        assert!(kit < total);
        assert!(total < closing);
    }

    #[test]
    fn message_itemizes_kit_with_prices_and_subtotal() {
        let composition = compose(&draft()).unwrap();
        assert!(composition.message.contains("• White Cotton Shroud - ₹500"));
        assert!(composition.message.contains("• Pure Cow Ghee - ₹300"));
        assert!(composition.message.contains("*Kit Subtotal: ₹800*"));
    }

    #[test]
    fn empty_services_section_is_omitted_entirely() {
        let composition = compose(&draft()).unwrap();
        assert!(!composition.message.contains("Additional Services"));
        assert!(!composition.message.contains("Services Subtotal"));
    }

    #[test]
    fn empty_kit_section_is_omitted_entirely() {
        let mut d = draft();
        d.selected_kit_items.clear();
        let composition = compose(&d).unwrap();
        assert!(!composition.message.contains("Selected Kit Items"));
        assert!(!composition.message.contains("Kit Subtotal"));
    }

    #[test]
    fn service_duration_is_rendered_when_present() {
        let mut d = draft();
        d.selected_services.push(Service {
            id: "transport".to_string(),
            name: "Body Transportation".to_string(),
            description: String::new(),
            price: 1500,
            duration: Some("As needed".to_string()),
        });
        d.selected_services.push(Service {
            id: "misc".to_string(),
            name: "Miscellaneous".to_string(),
            description: String::new(),
            price: 100,
            duration: None,
        });

        let composition = compose(&d).unwrap();
        assert!(composition
            .message
            .contains("• Body Transportation - ₹1500 (As needed)"));
        assert!(composition.message.contains("• Miscellaneous - ₹100"));
        assert!(!composition.message.contains("Miscellaneous - ₹100 ("));
    }

    #[test]
    fn personal_details_are_rendered_verbatim() {
        let composition = compose(&draft()).unwrap();
        assert!(composition.message.contains("Name: Ravi Kumar"));
        assert!(composition.message.contains("Phone: 9876543210"));
        assert!(composition.message.contains("Address: 12 Civil Lines, Agra"));
    }

    #[test]
    fn compose_is_deterministic() {
        let d = draft();
        assert_eq!(compose(&d).unwrap(), compose(&d).unwrap());
    }

    #[test]
    fn encoded_message_is_url_safe() {
        let composition = compose(&draft()).unwrap();
        let encoded = composition.encoded_message();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(encoded.contains("%20"));
    }
}
