use super::CommandHandler;
use crate::manager::InstallationManager;
use crate::Result;
use std::io::Write;

/// Handler for the `install` command
pub struct InstallCommand {
    pub name: String,
}

impl InstallCommand {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl CommandHandler for InstallCommand {
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()> {
        let installed = manager.install(&self.name)?;
        writeln!(out, "Installed {} {}", installed.name, installed.version)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "install"
    }
}
