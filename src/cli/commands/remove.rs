use super::CommandHandler;
use crate::manager::InstallationManager;
use crate::Result;
use std::io::Write;

/// Handler for the `remove` (alias `uninstall`) command
pub struct RemoveCommand {
    pub name: String,
}

impl RemoveCommand {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl CommandHandler for RemoveCommand {
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()> {
        let removed = manager.remove(&self.name)?;
        writeln!(out, "Removed {}", removed.name)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "remove"
    }
}
