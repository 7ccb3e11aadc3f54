use super::CatalogEntry;
use crate::distribution::DistributionKind::{DiskImage, InstallerPackage, RepositoryBundle};
use crate::platform::Platform::{FreeBsd, Linux, MacOs, OpenBsd, Solaris};

pub(super) fn entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "curl",
            "8.7.1",
            "Command-line tool for transferring data with URL syntax.",
            "https://curl.se",
            [MacOs, Linux, FreeBsd, OpenBsd, Solaris],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "wget",
            "1.24.5",
            "Non-interactive network downloader supporting HTTP, HTTPS, and FTP.",
            "https://www.gnu.org/software/wget/",
            [MacOs, Linux, FreeBsd],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "git",
            "2.45.1",
            "Distributed version control system.",
            "https://git-scm.com",
            [MacOs, Linux, FreeBsd, OpenBsd],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "openssl",
            "3.2.1",
            "Toolkit for TLS and general-purpose cryptography.",
            "https://www.openssl.org",
            [MacOs, Linux, FreeBsd, OpenBsd, Solaris],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "python",
            "3.12.3",
            "High-level programming language focused on readability.",
            "https://www.python.org",
            [MacOs, Linux, FreeBsd],
            InstallerPackage,
        ),
        CatalogEntry::new(
            "node",
            "22.2.0",
            "JavaScript runtime built on Chrome's V8 engine.",
            "https://nodejs.org",
            [MacOs, Linux],
            InstallerPackage,
        ),
        CatalogEntry::new(
            "neovim",
            "0.9.5",
            "Refactor-friendly fork of Vim with modern features.",
            "https://neovim.io",
            [MacOs, Linux, FreeBsd],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "htop",
            "3.3.0",
            "Interactive process viewer for Unix systems.",
            "https://htop.dev",
            [MacOs, Linux, FreeBsd],
            RepositoryBundle,
        ),
        CatalogEntry::new(
            "iterm2",
            "3.5.2",
            "Terminal emulator with split panes and rich search.",
            "https://iterm2.com",
            [MacOs],
            DiskImage,
        ),
    ]
}
