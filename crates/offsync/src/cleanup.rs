//! Removal of intermediate artifacts.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::config::{CLIENT_FILE, OFFSETS_FILE, UpdaterConfig};
use crate::error::Result;
use crate::log::CLEANUP;

/// Delete the dumper, its documents, its log and its output directory.
///
/// Absent targets are skipped. Returns the paths that were removed.
pub fn cleanup(config: &UpdaterConfig) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    let files = [
        (config.dumper_name.as_str(), config.dumper_path()),
        (OFFSETS_FILE, config.offsets_path()),
        (CLIENT_FILE, config.client_path()),
        (config.log_name.as_str(), config.log_path()),
    ];
    for (name, path) in files {
        if remove_if_exists(fs::remove_file(&path))? {
            info!(target: CLEANUP, "Deleted {}", name);
            removed.push(path);
        }
    }

    let output_dir = config.output_dir();
    if remove_if_exists(fs::remove_dir_all(&output_dir))? {
        info!(target: CLEANUP, "Removed {} directory", config.output_dir_name);
        removed.push(output_dir);
    }

    Ok(removed)
}

fn remove_if_exists(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_removes_all_targets() {
        let dir = TempDir::new().unwrap();
        for name in ["cs2-dumper.exe", "offsets.json", "client_dll.json", "cs2-dumper.log"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir_all(dir.path().join("output").join("nested")).unwrap();
        fs::write(dir.path().join("offsets.py"), "class Offsets:\n    pass\n").unwrap();
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();

        let removed = cleanup(&config).unwrap();
        assert_eq!(removed.len(), 5);
        assert!(!dir.path().join("cs2-dumper.log").exists());
        assert!(!dir.path().join("output").exists());
        assert!(dir.path().join("offsets.py").exists());
    }

    #[test]
    fn test_ignores_absent_targets() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("offsets.json"), "{}").unwrap();
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();

        let removed = cleanup(&config).unwrap();
        assert_eq!(removed, vec![dir.path().join("offsets.json")]);
        assert!(cleanup(&config).unwrap().is_empty());
    }
}
