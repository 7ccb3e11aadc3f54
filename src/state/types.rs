use crate::catalog::CatalogEntry;
use crate::distribution::DistributionKind;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Persisted fact that a package is installed, snapshotted from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalledRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub homepage: String,
    /// Set once when the record is created
    pub installed_at: DateTime<Utc>,
    pub distribution: DistributionKind,
    pub install_location: String,
}

impl InstalledRecord {
    /// Create a record for `entry` installed now at `install_location`
    pub fn from_entry(entry: &CatalogEntry, install_location: String) -> Self {
        Self::from_entry_at(entry, install_location, Utc::now())
    }

    pub fn from_entry_at(
        entry: &CatalogEntry,
        install_location: String,
        installed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: entry.name.clone(),
            version: entry.version.clone(),
            description: entry.description.clone(),
            homepage: entry.homepage.clone(),
            installed_at,
            distribution: entry.distribution,
            install_location,
        }
    }

    /// Identity key in the store
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn formatted_install_date(&self) -> String {
        self.installed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
