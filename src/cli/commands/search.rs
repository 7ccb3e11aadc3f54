use super::{write_json, CommandHandler};
use crate::cli::app::OutputFormat;
use crate::manager::InstallationManager;
use crate::Result;
use std::io::Write;

/// Handler for the `search` command
pub struct SearchCommand {
    pub query: String,
    pub format: OutputFormat,
}

impl SearchCommand {
    pub fn new(query: String, format: OutputFormat) -> Self {
        Self { query, format }
    }
}

impl CommandHandler for SearchCommand {
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()> {
        let matches = manager.search(&self.query);

        if self.format.is_json() {
            return write_json(out, &matches);
        }

        if matches.is_empty() {
            writeln!(out, "No packages matched \"{}\".", self.query)?;
            return Ok(());
        }

        for pkg in matches {
            writeln!(out, "{} {} [{}]", pkg.name, pkg.version, pkg.platform_names())?;
            writeln!(out, "  {}", pkg.description)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
