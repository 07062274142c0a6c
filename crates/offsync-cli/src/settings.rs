//! Optional `offsync.toml` settings file.
//!
//! Values from the file sit between the built-in defaults and the
//! command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use offsync::{OutputFormat, UpdaterConfig};
use serde::Deserialize;
use tracing::debug;

use crate::cli::Args;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub url: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub cleanup_on_failure: Option<bool>,
}

impl Settings {
    /// Load settings, treating a missing file as empty
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Merge defaults, settings file and flags into the updater configuration
pub fn resolve_config(work_dir: PathBuf, settings: Settings, args: &Args) -> UpdaterConfig {
    let mut builder = UpdaterConfig::builder().work_dir(work_dir);

    if let Some(url) = args.url.clone().or(settings.url) {
        builder = builder.dumper_url(url);
    }
    if let Some(format) = args.format.map(OutputFormat::from).or(settings.format) {
        builder = builder.format(format);
    }
    if let Some(output) = args.output.clone().or(settings.output) {
        builder = builder.output_path(output);
    }
    let cleanup_on_failure =
        args.cleanup_on_failure || settings.cleanup_on_failure.unwrap_or(false);

    builder.cleanup_on_failure(cleanup_on_failure).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("offsync.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("offsync.toml");
        fs::write(&path, "format = \"lua\"\n").unwrap();
        assert!(Settings::load(&path).is_err());

        fs::write(&path, "colour = true\n").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("offsync.toml");
        fs::write(
            &path,
            "url = \"https://mirror.example/cs2-dumper.exe\"\nformat = \"rust\"\ncleanup_on_failure = true\n",
        )
        .unwrap();
        let settings = Settings::load(&path).unwrap();

        let args = Args::try_parse_from(["offsync", "--format", "python"]).unwrap();
        let config = resolve_config(dir.path().to_path_buf(), settings, &args);

        assert_eq!(config.dumper_url, "https://mirror.example/cs2-dumper.exe");
        assert_eq!(config.format, OutputFormat::Python);
        assert_eq!(config.constants_path(), dir.path().join("offsets.py"));
        assert!(config.cleanup_on_failure);
    }

    #[test]
    fn test_file_output_without_flags() {
        let settings = Settings {
            format: Some(OutputFormat::Rust),
            ..Settings::default()
        };
        let args = Args::try_parse_from(["offsync"]).unwrap();
        let config = resolve_config(PathBuf::from("/srv/offsets"), settings, &args);

        assert_eq!(config.constants_path(), PathBuf::from("/srv/offsets/offsets.rs"));
        assert_eq!(config.dumper_url, offsync::config::DEFAULT_DUMPER_URL);
        assert!(!config.cleanup_on_failure);
    }
}
