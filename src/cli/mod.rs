pub mod app;
pub mod commands;

pub use app::{Cli, Commands, LogLevel, OutputFormat};

use std::path::Path;

/// Banner printed when no subcommand is given
pub fn welcome(store_file: &Path) -> String {
    format!(
        "unixpackage - lightweight UNIX package manager prototype\n\
         \n\
         Usage:\n  \
           unixpackage <command> [arguments]\n\
         \n\
         Try `unixpackage help` to see available commands.\n\
         State is kept in {}\n",
        store_file.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_names_store_location() {
        let text = welcome(Path::new("/home/me/.local/share/unixpackage/packages.json"));
        assert!(text.contains("unixpackage <command>"));
        assert!(text.ends_with("/home/me/.local/share/unixpackage/packages.json\n"));
    }
}
