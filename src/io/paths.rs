use crate::{PackageError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Name of the store file inside the data directory
pub const STORE_FILE: &str = "packages.json";

/// Name of the optional configuration file inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Path management for unixpackage configuration and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Configuration directory (~/.config/unixpackage on Linux)
    pub config_dir: PathBuf,
    /// Data directory holding the package store (~/.local/share/unixpackage on Linux)
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Create new paths instance using the per-user platform directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "unixpackage").ok_or_else(|| {
            PackageError::Path("Failed to determine per-user application directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Paths rooted at a single directory (used for overrides and tests)
    pub fn for_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.to_path_buf(),
        }
    }

    /// Replace the data directory, keeping the config directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn store_file(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_paths_creation() {
        // ProjectDirs needs a home directory; skip where none is available
        if let Ok(paths) = AppPaths::new() {
            assert!(paths.store_file().ends_with(STORE_FILE));
            assert!(paths.config_file().ends_with(CONFIG_FILE));
        }
    }

    #[test]
    fn test_root_paths() {
        let root = Path::new("/tmp/unixpackage-test");
        let paths = AppPaths::for_root(root);

        assert_eq!(paths.store_file(), root.join("packages.json"));
        assert_eq!(paths.config_file(), root.join("config.toml"));
    }

    #[test]
    fn test_data_dir_override() {
        let paths = AppPaths::for_root(Path::new("/etc/up")).with_data_dir("/var/lib/up");

        assert_eq!(paths.config_dir, PathBuf::from("/etc/up"));
        assert_eq!(paths.store_file(), PathBuf::from("/var/lib/up/packages.json"));
    }
}
