//! Read-only table of packages that can be installed

mod seed;

use crate::distribution::DistributionKind;
use crate::platform::Platform;
use serde::Serialize;
use std::collections::BTreeSet;

/// Metadata for a package available from the default repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    pub platforms: BTreeSet<Platform>,
    pub distribution: DistributionKind,
}

impl CatalogEntry {
    pub fn new(
        name: &str,
        version: &str,
        description: &str,
        homepage: &str,
        platforms: impl IntoIterator<Item = Platform>,
        distribution: DistributionKind,
    ) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: description.to_string(),
            homepage: homepage.to_string(),
            platforms: platforms.into_iter().collect(),
            distribution,
        }
    }

    /// Comma separated display names of the supported platforms
    pub fn platform_names(&self) -> String {
        self.platforms
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Catalog over an arbitrary set of entries, kept sorted by lowercased name
    pub fn new(mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by_key(|e| e.name.to_lowercase());
        Self { entries }
    }

    /// The built-in default repository
    pub fn builtin() -> Self {
        Self::new(seed::entries())
    }

    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        let normalized = name.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == normalized)
    }

    /// Case-insensitive substring match on name or description.
    /// An empty query returns every entry.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        if query.is_empty() {
            return self.entries.iter().collect();
        }

        let normalized = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&normalized)
                    || e.description.to_lowercase().contains(&normalized)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
