use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("No package named {0} in the default repository.")]
    PackageNotFound(String),

    #[error("{0} is already installed.")]
    AlreadyInstalled(String),

    #[error("{0} is not installed.")]
    NotInstalled(String),

    #[error("{name} is not available for {platform}.")]
    PlatformUnsupported { name: String, platform: String },

    #[error("Unable to update local package store: {0}")]
    StorageFailure(String),

    #[error("Package store at {} is corrupt: {reason}", path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl PackageError {
    /// Process exit status for a command that failed with this error
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, PackageError>;
