pub mod catalog;
pub mod cli;
pub mod config;
pub mod distribution;
pub mod error;
pub mod io;
pub mod manager;
pub mod platform;
pub mod state;

pub use error::{PackageError, Result};
pub use manager::{InstallationManager, PackageInfo};
