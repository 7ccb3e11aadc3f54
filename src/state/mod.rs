pub mod store;
pub mod types;

pub use store::InstallationStore;
pub use types::InstalledRecord;
