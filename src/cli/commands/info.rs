use super::{write_json, CommandHandler};
use crate::cli::app::OutputFormat;
use crate::manager::InstallationManager;
use crate::Result;
use std::io::Write;

/// Handler for the `info` command
pub struct InfoCommand {
    pub name: String,
    pub format: OutputFormat,
}

impl InfoCommand {
    pub fn new(name: String, format: OutputFormat) -> Self {
        Self { name, format }
    }
}

impl CommandHandler for InfoCommand {
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()> {
        let info = manager.info(&self.name);

        if self.format.is_json() {
            return write_json(out, &info);
        }

        match info.available {
            Some(pkg) => {
                writeln!(out, "{} {}", pkg.name, pkg.version)?;
                writeln!(out, "{}", pkg.description)?;
                writeln!(out, "Homepage: {}", pkg.homepage)?;
                writeln!(out, "Platforms: {}", pkg.platform_names())?;
                writeln!(out, "Distribution: {}", pkg.distribution)?;

                // Installed records keep the location they were created with
                let location = match info.installed {
                    Some(record) => record.install_location.clone(),
                    None => manager.install_location(pkg).display().to_string(),
                };
                for (i, step) in pkg.distribution.steps(&pkg.name, &location).iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, step)?;
                }
            }
            None => writeln!(out, "No information found for {}.", self.name.trim())?,
        }

        if let Some(installed) = info.installed {
            writeln!(out, "Installed at: {}", installed.formatted_install_date())?;
            writeln!(out, "Location: {}", installed.install_location)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "info"
    }
}
