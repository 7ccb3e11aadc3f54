//! How a package is (hypothetically) delivered to the host

use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default prefix for derived install locations
pub const DEFAULT_INSTALL_ROOT: &str = "/usr/local";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionKind {
    /// Prebuilt bundle fetched from the package repository
    RepositoryBundle,
    /// Signed installer package run against the target volume
    InstallerPackage,
    /// Application copied out of a mounted disk image
    DiskImage,
}

impl DistributionKind {
    pub fn label(&self) -> &'static str {
        match self {
            DistributionKind::RepositoryBundle => "repository bundle",
            DistributionKind::InstallerPackage => "signed installer package",
            DistributionKind::DiskImage => "disk image application",
        }
    }

    /// Where a package of this kind lands under `root`
    pub fn install_location(&self, name: &str, platform: Option<Platform>, root: &Path) -> PathBuf {
        let mac = platform == Some(Platform::MacOs);
        match self {
            DistributionKind::RepositoryBundle if mac => root.join("Cellar").join(name),
            DistributionKind::RepositoryBundle => root.join("opt").join(name),
            DistributionKind::InstallerPackage => root.join("pkg").join(name),
            DistributionKind::DiskImage if mac => {
                root.join("Applications").join(format!("{}.app", name))
            }
            DistributionKind::DiskImage => root.join("share").join("applications").join(name),
        }
    }

    /// Human-readable description of the install steps
    pub fn steps(&self, name: &str, location: &str) -> Vec<String> {
        match self {
            DistributionKind::RepositoryBundle => vec![
                format!("Fetch the {} bundle from the default repository", name),
                format!("Unpack the bundle into {}", location),
                format!("Link {} executables onto the PATH", name),
            ],
            DistributionKind::InstallerPackage => vec![
                format!("Download the signed {} installer package", name),
                "Verify the installer signature".to_string(),
                format!("Run the installer targeting {}", location),
            ],
            DistributionKind::DiskImage => vec![
                format!("Download the {} disk image", name),
                format!("Mount the image and copy the application to {}", location),
                "Detach the disk image".to_string(),
            ],
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
