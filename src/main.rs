use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unixpackage::{
    cli::{self, commands::handler_for, Cli, LogLevel},
    config::ConfigLoader,
    InstallationManager, Result,
};

/// Initialize tracing; RUST_LOG wins over --log-level when set
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // keep stdout for command output
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .with_config_file(cli.config)
        .with_data_dir(cli.data_dir)
        .load()?;

    // A corrupt store stops here, before any command runs
    let mut manager = InstallationManager::from_config(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let Some(command) = cli.command else {
        write!(out, "{}", cli::welcome(&config.store_file()))?;
        return Ok(());
    };

    let handler = handler_for(command);
    debug!(command = handler.name(), "Executing command");
    handler.execute(&mut manager, &mut out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
