//! Collector: move the dumper's JSON output into the working directory.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::{CLIENT_FILE, OFFSETS_FILE, UpdaterConfig};
use crate::error::{Error, Result};

/// Files the dumper must produce, in the order they are collected
pub const REQUIRED_OUTPUTS: [&str; 2] = [OFFSETS_FILE, CLIENT_FILE];

/// Move both required documents out of the output directory.
///
/// Fails on the first missing file; files already moved stay moved.
pub fn collect_outputs(config: &UpdaterConfig) -> Result<Vec<PathBuf>> {
    let output_dir = config.output_dir();
    let mut moved = Vec::with_capacity(REQUIRED_OUTPUTS.len());

    for name in REQUIRED_OUTPUTS {
        let src = output_dir.join(name);
        if !src.is_file() {
            return Err(Error::MissingOutput {
                file: name.to_string(),
                dir: output_dir,
            });
        }

        let dst = config.work_dir.join(name);
        fs::rename(&src, &dst)?;
        info!("Moved {} to current directory.", name);
        moved.push(dst);
    }

    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> (TempDir, UpdaterConfig) {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("output");
        fs::create_dir(&output).unwrap();
        for name in files {
            fs::write(output.join(name), "{}").unwrap();
        }
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();
        (dir, config)
    }

    #[test]
    fn test_moves_both_files() {
        let (dir, config) = setup(&["offsets.json", "client_dll.json"]);

        let moved = collect_outputs(&config).unwrap();
        assert_eq!(
            moved,
            vec![dir.path().join("offsets.json"), dir.path().join("client_dll.json")]
        );
        assert!(!dir.path().join("output").join("offsets.json").exists());
        assert!(dir.path().join("client_dll.json").exists());
    }

    #[test]
    fn test_missing_second_file_keeps_first_moved() {
        let (dir, config) = setup(&["offsets.json"]);

        let err = collect_outputs(&config).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("client_dll.json not found in"));
        assert!(dir.path().join("offsets.json").exists());
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = TempDir::new().unwrap();
        let config = UpdaterConfig::builder().work_dir(dir.path()).build();

        let err = collect_outputs(&config).unwrap_err();
        match err {
            Error::MissingOutput { file, .. } => assert_eq!(file, "offsets.json"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
