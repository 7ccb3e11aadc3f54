use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;
use unixpackage::catalog::CatalogEntry;
use unixpackage::distribution::DistributionKind;
use unixpackage::platform::Platform;
use unixpackage::state::{InstallationStore, InstalledRecord};

const WRITERS: usize = 6;
const WRITES_PER_WRITER: usize = 15;

fn record(name: &str) -> InstalledRecord {
    let entry = CatalogEntry::new(
        name,
        "1.0.0",
        "Concurrency test package with a reasonably long description to widen the write window.",
        "https://example.org",
        Platform::ALL,
        DistributionKind::RepositoryBundle,
    );
    InstalledRecord::from_entry(&entry, format!("/usr/local/opt/{}", name))
}

/// Independent stores over one file stand in for separate processes.
/// Last writer wins, but the file must always parse.
#[test]
fn test_concurrent_writers_never_corrupt_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("packages.json");
    InstallationStore::open(&path).unwrap();

    let barrier = Arc::new(Barrier::new(WRITERS));
    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let path = path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut store = InstallationStore::open(&path).unwrap();
                barrier.wait();
                for i in 0..WRITES_PER_WRITER {
                    store.insert(record(&format!("pkg-{}-{}", writer, i))).unwrap();
                    // every observable version is complete
                    InstallationStore::open(&path).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let store = InstallationStore::open(&path).unwrap();
    // the surviving file is one writer's complete view
    assert_eq!(store.len(), WRITES_PER_WRITER);
    let names: Vec<String> = store.list().into_iter().map(|r| r.name).collect();
    let owner = names[0].split('-').nth(1).unwrap().to_string();
    assert!(names.iter().all(|n| n.starts_with(&format!("pkg-{}-", owner))));
}
