use super::{write_json, CommandHandler};
use crate::cli::app::OutputFormat;
use crate::manager::InstallationManager;
use crate::Result;
use std::io::Write;

/// Handler for the `list` command
pub struct ListCommand {
    pub format: OutputFormat,
}

impl ListCommand {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl CommandHandler for ListCommand {
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()> {
        let packages = manager.list();

        if self.format.is_json() {
            return write_json(out, &packages);
        }

        if packages.is_empty() {
            writeln!(
                out,
                "No packages installed yet. Try `unixpackage install <name>`."
            )?;
            return Ok(());
        }

        for pkg in &packages {
            writeln!(
                out,
                "{} {} - installed {}",
                pkg.name,
                pkg.version,
                pkg.formatted_install_date()
            )?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}
