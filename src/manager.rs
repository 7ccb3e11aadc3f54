//! Install/remove orchestration over the catalog, platform matcher and store

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::ResolvedConfig;
use crate::platform::PlatformMatcher;
use crate::state::{InstallationStore, InstalledRecord};
use crate::{PackageError, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Catalog and store views of a single package name.
/// Either side may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageInfo<'a> {
    pub available: Option<&'a CatalogEntry>,
    pub installed: Option<&'a InstalledRecord>,
}

pub struct InstallationManager {
    catalog: Catalog,
    store: InstallationStore,
    matcher: PlatformMatcher,
    /// Prefix for derived install locations
    install_root: PathBuf,
}

impl InstallationManager {
    pub fn new(
        catalog: Catalog,
        store: InstallationStore,
        matcher: PlatformMatcher,
        install_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            store,
            matcher,
            install_root: install_root.into(),
        }
    }

    /// Manager over the built-in catalog and the configured store.
    /// Fails with `CorruptState` if the store file cannot be parsed.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let store = InstallationStore::open(config.store_file())?;

        Ok(Self::new(
            Catalog::builtin(),
            store,
            config.matcher(),
            config.install_root.clone(),
        ))
    }

    /// Install a package from the catalog.
    ///
    /// Checks run in a fixed order: catalog membership, then duplicate
    /// install, then platform support.
    pub fn install(&mut self, name: &str) -> Result<InstalledRecord> {
        let name = name.trim();
        let entry = self
            .catalog
            .lookup(name)
            .ok_or_else(|| PackageError::PackageNotFound(name.to_string()))?;

        if self.store.contains(&entry.name) {
            return Err(PackageError::AlreadyInstalled(entry.name.clone()));
        }

        if !self.matcher.supports(entry) {
            return Err(PackageError::PlatformUnsupported {
                name: entry.name.clone(),
                platform: self.matcher.current_label(),
            });
        }

        let location = entry
            .distribution
            .install_location(&entry.name, self.matcher.current(), &self.install_root);
        let record = InstalledRecord::from_entry(entry, location.display().to_string());
        debug!(package = %record.name, location = %record.install_location, "Installing");

        self.store
            .insert(record.clone())
            .map_err(into_storage_failure)?;

        info!(package = %record.name, version = %record.version, "Installed");
        Ok(record)
    }

    /// Remove an installed package and return its record
    pub fn remove(&mut self, name: &str) -> Result<InstalledRecord> {
        let name = name.trim();
        match self.store.delete(name) {
            Ok(Some(removed)) => {
                info!(package = %removed.name, "Removed");
                Ok(removed)
            }
            Ok(None) => Err(PackageError::NotInstalled(name.to_string())),
            Err(e) => Err(into_storage_failure(e)),
        }
    }

    pub fn list(&self) -> Vec<InstalledRecord> {
        self.store.list()
    }

    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        self.catalog.search(query)
    }

    pub fn info(&self, name: &str) -> PackageInfo<'_> {
        let name = name.trim();
        PackageInfo {
            available: self.catalog.lookup(name),
            installed: self.store.get(name),
        }
    }

    /// Where `entry` would be installed on this host
    pub fn install_location(&self, entry: &CatalogEntry) -> PathBuf {
        entry
            .distribution
            .install_location(&entry.name, self.matcher.current(), &self.install_root)
    }

    pub fn store(&self) -> &InstallationStore {
        &self.store
    }
}

fn into_storage_failure(err: PackageError) -> PackageError {
    match err {
        PackageError::StorageFailure(_) => err,
        other => PackageError::StorageFailure(other.to_string()),
    }
}
