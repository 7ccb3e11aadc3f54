use crate::state::types::InstalledRecord;
use crate::{PackageError, Result};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File-backed mapping from lowercased package name to its installed record.
///
/// Memory and disk agree whenever control returns to the caller: mutations
/// are written with temp-file-plus-rename and rolled back in memory if the
/// write fails.
#[derive(Debug)]
pub struct InstallationStore {
    /// Backing JSON file
    path: PathBuf,
    /// Records keyed by lowercased name
    records: BTreeMap<String, InstalledRecord>,
}

impl InstallationStore {
    /// Open the store at `path`, creating the directory and an empty record
    /// collection if they do not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        Self::prepare(&path)?;
        let records = Self::load(&path)?;

        debug!(path = %path.display(), count = records.len(), "Loaded package store");
        Ok(Self { path, records })
    }

    /// Re-read the backing file, replacing the in-memory view
    pub fn reload(&mut self) -> Result<()> {
        self.records = Self::load(&self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(&name.to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&InstalledRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// All records, sorted by lowercased name
    pub fn list(&self) -> Vec<InstalledRecord> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add or replace the record under its lowercased name and persist
    pub fn insert(&mut self, record: InstalledRecord) -> Result<()> {
        let key = record.key();
        let previous = self.records.insert(key.clone(), record);

        if let Err(e) = self.persist() {
            match previous {
                Some(previous) => {
                    self.records.insert(key.clone(), previous);
                }
                None => {
                    self.records.remove(&key);
                }
            }
            warn!(package = %key, error = %e, "Rolled back insert after failed write");
            return Err(e);
        }

        info!(package = %key, "Recorded installation");
        Ok(())
    }

    /// Remove the record for `name` if present and persist.
    /// Returns `Ok(None)` without touching the file when nothing matched.
    pub fn delete(&mut self, name: &str) -> Result<Option<InstalledRecord>> {
        let key = name.to_lowercase();
        let Some(removed) = self.records.remove(&key) else {
            return Ok(None);
        };

        if let Err(e) = self.persist() {
            self.records.insert(key.clone(), removed);
            warn!(package = %key, error = %e, "Rolled back delete after failed write");
            return Err(e);
        }

        info!(package = %key, "Removed installation record");
        Ok(Some(removed))
    }

    fn prepare(path: &Path) -> Result<()> {
        let dir = Self::parent_dir(path);
        fs::create_dir_all(dir).map_err(|e| storage_failure("create directory", dir, e))?;

        // create_new so a concurrent writer's file is never truncated
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(b"[]\n")
                    .map_err(|e| storage_failure("initialize", path, e))?;
                debug!(path = %path.display(), "Created empty package store");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(storage_failure("create", path, e)),
        }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, InstalledRecord>> {
        let content = fs::read(path).map_err(|e| storage_failure("read", path, e))?;

        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        let list: Vec<InstalledRecord> =
            serde_json::from_slice(&content).map_err(|e| PackageError::CorruptState {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut records = BTreeMap::new();
        for record in list {
            let key = record.key();
            if records.insert(key.clone(), record).is_some() {
                return Err(PackageError::CorruptState {
                    path: path.to_path_buf(),
                    reason: format!("duplicate record for {}", key),
                });
            }
        }

        Ok(records)
    }

    fn persist(&self) -> Result<()> {
        let list: Vec<&InstalledRecord> = self.records.values().collect();
        let mut content = serde_json::to_string_pretty(&list)
            .map_err(|e| storage_failure("serialize", &self.path, e))?;
        content.push('\n');

        let dir = Self::parent_dir(&self.path);
        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| storage_failure("write", &self.path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| storage_failure("write", &self.path, e))?;

        // temp files are created 0600; keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| storage_failure("write", &self.path, e))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| storage_failure("replace", &self.path, e.error))?;
        Self::sync_dir(dir);

        debug!(path = %self.path.display(), count = list.len(), "Persisted package store");
        Ok(())
    }

    /// Flush the directory entry so the rename survives a crash.
    /// The new contents are already in place, so a failure is only logged.
    #[cfg(unix)]
    fn sync_dir(dir: &Path) {
        if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
            warn!(dir = %dir.display(), error = %e, "Failed to sync store directory");
        }
    }

    #[cfg(not(unix))]
    fn sync_dir(_dir: &Path) {}

    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn storage_failure(action: &str, path: &Path, err: impl Display) -> PackageError {
    PackageError::StorageFailure(format!("failed to {} {}: {}", action, path.display(), err))
}
