pub mod info;
pub mod install;
pub mod list;
pub mod remove;
pub mod search;

use super::app::{Commands, OutputFormat};
use crate::manager::InstallationManager;
use crate::Result;
use serde::Serialize;
use std::io::Write;

use info::InfoCommand;
use install::InstallCommand;
use list::ListCommand;
use remove::RemoveCommand;
use search::SearchCommand;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command, writing user-facing output to `out`
    fn execute(&self, manager: &mut InstallationManager, out: &mut dyn Write) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Build the handler for a parsed subcommand
pub fn handler_for(command: Commands) -> Box<dyn CommandHandler> {
    match command {
        Commands::Install { name } => Box::new(InstallCommand::new(name)),
        Commands::Remove { name } => Box::new(RemoveCommand::new(name)),
        Commands::List { format } => Box::new(ListCommand::new(format)),
        Commands::Search { query, format } => Box::new(SearchCommand::new(query, format)),
        Commands::Info { name, format } => Box::new(InfoCommand::new(name, format)),
    }
}

/// Write `value` as pretty JSON followed by a newline
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}
