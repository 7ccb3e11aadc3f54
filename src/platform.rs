//! Host platform detection and catalog compatibility checks

use crate::catalog::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platforms a catalog entry can declare support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(alias = "macOS")]
    MacOs,
    #[serde(alias = "Linux")]
    Linux,
    #[serde(alias = "FreeBSD")]
    FreeBsd,
    #[serde(alias = "OpenBSD")]
    OpenBsd,
    #[serde(alias = "Solaris")]
    Solaris,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::MacOs,
        Platform::Linux,
        Platform::FreeBsd,
        Platform::OpenBsd,
        Platform::Solaris,
    ];

    /// Resolve the running host from the runtime OS identifier
    pub fn detect() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style identifier to a platform
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            "freebsd" => Some(Platform::FreeBsd),
            "openbsd" => Some(Platform::OpenBsd),
            "solaris" | "illumos" => Some(Platform::Solaris),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::FreeBsd => "FreeBSD",
            Platform::OpenBsd => "OpenBSD",
            Platform::Solaris => "Solaris",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.display_name().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown platform: {}", s))
    }
}

/// What to do when the host platform could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPlatformPolicy {
    /// Treat every package as supported
    #[default]
    Allow,
    /// Refuse every package
    Deny,
}

/// Decides whether catalog entries can be installed on the resolved host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMatcher {
    current: Option<Platform>,
    policy: UnknownPlatformPolicy,
}

impl PlatformMatcher {
    pub fn new(current: Option<Platform>, policy: UnknownPlatformPolicy) -> Self {
        Self { current, policy }
    }

    pub fn current(&self) -> Option<Platform> {
        self.current
    }

    /// Label used in messages; "current platform" when unresolved
    pub fn current_label(&self) -> String {
        self.current
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| "current platform".to_string())
    }

    pub fn supports(&self, entry: &CatalogEntry) -> bool {
        match self.current {
            Some(platform) => entry.platforms.contains(&platform),
            None => self.policy == UnknownPlatformPolicy::Allow,
        }
    }
}
