//! Read-only reference catalog: religions, per-religion ritual kits, and
//! add-on services.
//!
//! Built-in data is embedded in the binary; a user catalog file (single JSON
//! document with `religions`, `kits` and `services` arrays) can replace it
//! via `paths.catalog` in the config. The catalog is never mutated at
//! runtime. Lookups that miss return `None` so the caller can render nothing
//! for that step instead of failing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const RELIGIONS_JSON: &str = include_str!("data/religions.json");
const KITS_JSON: &str = include_str!("data/kits.json");
const SERVICES_JSON: &str = include_str!("data/services.json");

/// A religion offered in the wizard's first step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Religion {
    pub id: String,
    pub name: String,
    /// Display glyph shown next to the name (e.g. "🕉️")
    pub icon: String,
}

/// One item of a religion's ritual kit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole rupees
    pub price: u64,
    /// Required items are auto-selected and cannot be removed
    pub required: bool,
}

/// The ordered ritual kit for one religion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    pub religion_id: String,
    pub items: Vec<KitItem>,
}

impl Kit {
    /// The subset of items flagged required, in kit order
    pub fn required_items(&self) -> Vec<KitItem> {
        self.items.iter().filter(|i| i.required).cloned().collect()
    }
}

/// An optional add-on service, not scoped to any religion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole rupees
    pub price: u64,
    /// Free-text duration label (e.g. "2-3 hours")
    #[serde(default)]
    pub duration: Option<String>,
}

/// File format for a user-supplied catalog override
#[derive(Debug, Deserialize)]
struct CatalogFile {
    religions: Vec<Religion>,
    kits: Vec<Kit>,
    services: Vec<Service>,
}

/// The complete reference dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    religions: Vec<Religion>,
    kits: Vec<Kit>,
    services: Vec<Service>,
}

impl Catalog {
    /// Build the catalog from the embedded dataset
    pub fn builtin() -> Result<Self> {
        let religions: Vec<Religion> =
            serde_json::from_str(RELIGIONS_JSON).context("Failed to parse embedded religions")?;
        let kits: Vec<Kit> =
            serde_json::from_str(KITS_JSON).context("Failed to parse embedded kits")?;
        let services: Vec<Service> =
            serde_json::from_str(SERVICES_JSON).context("Failed to parse embedded services")?;

        debug!(
            religions = religions.len(),
            kits = kits.len(),
            services = services.len(),
            "Loaded builtin catalog"
        );

        Ok(Self {
            religions,
            kits,
            services,
        })
    }

    /// Load a catalog from a user-supplied JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        debug!(path = %path.display(), "Loaded user catalog");

        Ok(Self {
            religions: file.religions,
            kits: file.kits,
            services: file.services,
        })
    }

    pub fn religions(&self) -> &[Religion] {
        &self.religions
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a religion by id
    pub fn religion(&self, id: &str) -> Option<&Religion> {
        self.religions.iter().find(|r| r.id == id)
    }

    /// Look up the kit for a religion. `None` when the religion has no kit,
    /// in which case the kit step renders nothing.
    pub fn kit_for(&self, religion_id: &str) -> Option<&Kit> {
        self.kits.iter().find(|k| k.religion_id == religion_id)
    }

    /// Look up a service by id
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.religions().len(), 4);
        assert_eq!(catalog.services().len(), 12);
    }

    #[test]
    fn every_religion_has_a_kit_with_required_items() {
        let catalog = Catalog::builtin().unwrap();
        for religion in catalog.religions() {
            let kit = catalog.kit_for(&religion.id).unwrap();
            assert!(
                !kit.required_items().is_empty(),
                "kit for {} has no required items",
                religion.id
            );
        }
    }

    #[test]
    fn kit_item_ids_are_unique_within_a_kit() {
        let catalog = Catalog::builtin().unwrap();
        for religion in catalog.religions() {
            let kit = catalog.kit_for(&religion.id).unwrap();
            let mut ids: Vec<&str> = kit.items.iter().map(|i| i.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), kit.items.len());
        }
    }

    #[test]
    fn unknown_lookups_return_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.religion("jain").is_none());
        assert!(catalog.kit_for("jain").is_none());
        assert!(catalog.service("helicopter").is_none());
    }

    #[test]
    fn catalog_from_file_roundtrip() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        let doc = serde_json::json!({
            "religions": [{"id": "hindu", "name": "Hindu", "icon": "🕉️"}],
            "kits": [{"religion_id": "hindu", "items": [
                {"id": "shroud", "name": "Shroud", "description": "d", "price": 500, "required": true}
            ]}],
            "services": []
        });
        fs::write(&path, doc.to_string()).unwrap();

        let catalog = Catalog::from_file(&path).unwrap();
        assert_eq!(catalog.religions().len(), 1);
        assert_eq!(catalog.kit_for("hindu").unwrap().items.len(), 1);
    }
}
