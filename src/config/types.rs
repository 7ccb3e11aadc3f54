use crate::io::AppPaths;
use crate::platform::{Platform, PlatformMatcher, UnknownPlatformPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of config.toml. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory holding packages.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Use this platform instead of the detected one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// Behaviour when the host platform cannot be resolved
    #[serde(default)]
    pub unknown_platform: UnknownPlatformPolicy,

    /// Prefix for derived install locations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_root: Option<PathBuf>,
}

/// Settings after merging file, environment and command-line sources
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub paths: AppPaths,
    pub platform: Option<Platform>,
    pub unknown_platform: UnknownPlatformPolicy,
    pub install_root: PathBuf,
}

impl ResolvedConfig {
    pub fn matcher(&self) -> PlatformMatcher {
        PlatformMatcher::new(self.platform, self.unknown_platform)
    }

    pub fn store_file(&self) -> PathBuf {
        self.paths.store_file()
    }
}
