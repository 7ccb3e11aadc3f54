use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// unixpackage: lightweight UNIX package manager prototype
#[derive(Parser, Debug)]
#[command(name = "unixpackage")]
#[command(version)]
#[command(about = "Lightweight UNIX package manager prototype")]
#[command(
    long_about = "unixpackage resolves packages against its default repository, checks platform support, and records installed packages in a local store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (defaults to the per-user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the package store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, global = true, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Install a package from the default repository
    Install {
        /// Package name
        name: String,
    },

    /// Remove a package from the local store
    #[command(alias = "uninstall")]
    Remove {
        /// Package name
        name: String,
    },

    /// List installed packages
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search packages (empty query lists all)
    Search {
        /// Substring matched against names and descriptions
        #[arg(default_value = "")]
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show details for a package
    Info {
        /// Package name
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Install { .. } => "install",
            Commands::Remove { .. } => "remove",
            Commands::List { .. } => "list",
            Commands::Search { .. } => "search",
            Commands::Info { .. } => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
