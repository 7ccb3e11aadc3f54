use super::types::{ResolvedConfig, Settings};
use crate::distribution::DEFAULT_INSTALL_ROOT;
use crate::io::AppPaths;
use crate::platform::Platform;
use crate::{PackageError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the store directory
pub const DATA_DIR_ENV: &str = "UNIXPACKAGE_DATA_DIR";

/// Overrides the detected platform
pub const PLATFORM_ENV: &str = "UNIXPACKAGE_PLATFORM";

/// Resolves configuration from config.toml, the environment and CLI flags.
/// Precedence: CLI > environment > file > defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Explicit config file path (--config)
    config_file: Option<PathBuf>,
    /// Explicit data directory (--data-dir)
    data_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn with_data_dir(mut self, path: Option<PathBuf>) -> Self {
        self.data_dir = path;
        self
    }

    /// Resolve using the process environment
    pub fn load(&self) -> Result<ResolvedConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Resolve using `env` for environment lookups
    pub fn load_with_env<F>(&self, env: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppPaths::new();

        let config_file = match (&self.config_file, &defaults) {
            (Some(path), _) => Some(path.clone()),
            (None, Ok(paths)) => Some(paths.config_file()),
            (None, Err(_)) => None,
        };
        let settings = match config_file {
            Some(path) => Self::read_settings(&path)?,
            None => Settings::default(),
        };

        let data_dir = self
            .data_dir
            .clone()
            .or_else(|| env(DATA_DIR_ENV).map(PathBuf::from))
            .or_else(|| settings.data_dir.clone());
        let paths = match (data_dir, defaults) {
            (Some(dir), Ok(paths)) => paths.with_data_dir(dir),
            (Some(dir), Err(_)) => AppPaths::for_root(&dir),
            (None, Ok(paths)) => paths,
            (None, Err(e)) => return Err(e),
        };

        let platform = match env(PLATFORM_ENV) {
            Some(value) => Some(value.parse::<Platform>().map_err(PackageError::Config)?),
            None => settings.platform.or_else(Platform::detect),
        };

        let resolved = ResolvedConfig {
            paths,
            platform,
            unknown_platform: settings.unknown_platform,
            install_root: settings
                .install_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT)),
        };
        debug!(?resolved, "Resolved configuration");
        Ok(resolved)
    }

    /// Parse a config file; a missing file yields defaults
    pub fn read_settings(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PackageError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            PackageError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }
}
