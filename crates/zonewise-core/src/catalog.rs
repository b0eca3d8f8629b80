//! Zone catalogs: the per-dataset lists of known zone names.
//!
//! The catalog is the only dataset surface the engine needs. Numeric
//! metric columns, filtering, and chart rendering stay with the
//! presentation collaborator.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::Dataset;

/// Default zone list, applied uniformly to every dataset when no catalog
/// file is present.
const BUILTIN_ZONES: [&str; 15] = [
    "Thiruvottiyur",
    "Egmore",
    "Madhavaram",
    "Tondiarpet",
    "Royapuram",
    "Perambur",
    "Purasaiwakkam",
    "Anna Nagar",
    "Koyambedu",
    "T Nagar",
    "Velachery",
    "Guindy",
    "Adyar",
    "Vadapalani",
    "Sholinganallur",
];

/// Ordered zone-name lists per dataset. Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneCatalog {
    #[serde(default)]
    zones: BTreeMap<Dataset, Vec<String>>,
}

impl ZoneCatalog {
    /// Build a catalog from explicit per-dataset lists.
    pub fn from_map(zones: BTreeMap<Dataset, Vec<String>>) -> Self {
        Self { zones }
    }

    /// Build a catalog using the same zone list for every dataset.
    pub fn uniform(zones: Vec<String>) -> Self {
        let zones = Dataset::ALL
            .iter()
            .map(|dataset| (*dataset, zones.clone()))
            .collect();
        Self { zones }
    }

    /// The builtin default catalog.
    pub fn builtin() -> Self {
        Self::uniform(BUILTIN_ZONES.iter().map(|z| z.to_string()).collect())
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: ZoneCatalog = toml::from_str(&content)?;
        info!("Zone catalog loaded from {}", path.display());
        Ok(catalog)
    }

    /// Load a catalog from a TOML file, falling back to the builtin
    /// catalog if the file does not exist or cannot be parsed.
    pub fn load_or_builtin(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    "Failed to load zone catalog from {}: {}. Using builtin zones.",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    /// The ordered zone list for one dataset; empty if the dataset has none.
    pub fn zones(&self, dataset: Dataset) -> &[String] {
        self.zones
            .get(&dataset)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
