use tempfile::TempDir;
use unixpackage::catalog::Catalog;
use unixpackage::cli::commands::{handler_for, CommandHandler};
use unixpackage::cli::{Commands, OutputFormat};
use unixpackage::platform::{Platform, PlatformMatcher, UnknownPlatformPolicy};
use unixpackage::state::InstallationStore;
use unixpackage::{InstallationManager, PackageError};

fn create_test_manager(temp_dir: &TempDir) -> InstallationManager {
    let store = InstallationStore::open(temp_dir.path().join("packages.json")).unwrap();
    InstallationManager::new(
        Catalog::builtin(),
        store,
        PlatformMatcher::new(Some(Platform::Linux), UnknownPlatformPolicy::Allow),
        "/usr/local",
    )
}

fn run(manager: &mut InstallationManager, command: Commands) -> Result<String, PackageError> {
    let mut out = Vec::new();
    handler_for(command).execute(manager, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_install_and_remove_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);

    let installed = run(&mut manager, Commands::Install { name: "curl".to_string() }).unwrap();
    assert_eq!(installed, "Installed curl 8.7.1\n");

    let removed = run(&mut manager, Commands::Remove { name: "CURL".to_string() }).unwrap();
    assert_eq!(removed, "Removed curl\n");
}

#[test]
fn test_install_error_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);

    let err = run(&mut manager, Commands::Install { name: "iterm2".to_string() }).unwrap_err();
    assert_eq!(err.to_string(), "iterm2 is not available for Linux.");
}

#[test]
fn test_list_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);
    let text = OutputFormat::Text;

    let empty = run(&mut manager, Commands::List { format: text }).unwrap();
    assert!(empty.contains("No packages installed yet"));

    manager.install("wget").unwrap();
    manager.install("git").unwrap();
    let listed = run(&mut manager, Commands::List { format: text }).unwrap();
    let lines: Vec<&str> = listed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("git 2.45.1 - installed "));
    assert!(lines[1].starts_with("wget 1.24.5 - installed "));
}

#[test]
fn test_list_json_matches_store_format() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);
    manager.install("htop").unwrap();

    let json = run(&mut manager, Commands::List { format: OutputFormat::Json }).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["name"], "htop");
    assert_eq!(value[0]["installLocation"], "/usr/local/opt/htop");
    assert_eq!(value[0]["distribution"], "repository-bundle");
}

#[test]
fn test_search_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);

    let found = run(
        &mut manager,
        Commands::Search {
            query: "downloader".to_string(),
            format: OutputFormat::Text,
        },
    )
    .unwrap();
    assert_eq!(
        found,
        "wget 1.24.5 [macOS, Linux, FreeBSD]\n  Non-interactive network downloader supporting HTTP, HTTPS, and FTP.\n"
    );

    let none = run(
        &mut manager,
        Commands::Search {
            query: "zzz".to_string(),
            format: OutputFormat::Text,
        },
    )
    .unwrap();
    assert_eq!(none, "No packages matched \"zzz\".\n");
}

#[test]
fn test_info_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);

    let before = run(
        &mut manager,
        Commands::Info {
            name: "python".to_string(),
            format: OutputFormat::Text,
        },
    )
    .unwrap();
    assert!(before.starts_with("python 3.12.3\n"));
    assert!(before.contains("Homepage: https://www.python.org\n"));
    assert!(before.contains("Distribution: signed installer package\n"));
    assert!(before.contains("  3. Run the installer targeting /usr/local/pkg/python\n"));
    assert!(!before.contains("Installed at:"));

    manager.install("python").unwrap();
    let after = run(
        &mut manager,
        Commands::Info {
            name: "python".to_string(),
            format: OutputFormat::Text,
        },
    )
    .unwrap();
    assert!(after.contains("Installed at: "));
    assert!(after.contains("Location: /usr/local/pkg/python\n"));

    let missing = run(
        &mut manager,
        Commands::Info {
            name: "nonexistent-pkg".to_string(),
            format: OutputFormat::Text,
        },
    )
    .unwrap();
    assert_eq!(missing, "No information found for nonexistent-pkg.\n");
}

#[test]
fn test_info_json_reports_absence_as_null() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_manager(&temp_dir);

    let json = run(
        &mut manager,
        Commands::Info {
            name: "git".to_string(),
            format: OutputFormat::Json,
        },
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["available"]["name"], "git");
    assert!(value["installed"].is_null());
}

#[test]
fn test_handler_names() {
    let handler = handler_for(Commands::Search {
        query: String::new(),
        format: OutputFormat::Text,
    });
    assert_eq!(handler.name(), "search");
}
