//! Updater configuration
//!
//! Every stage receives the working directory explicitly through
//! [`UpdaterConfig`]; nothing relies on the process's current directory.

use std::path::{Path, PathBuf};

use crate::export::OutputFormat;

/// Default location of the prebuilt dumper
pub const DEFAULT_DUMPER_URL: &str =
    "https://github.com/Cr0mb/CS2-GFusion-Python/releases/download/dumper/cs2-dumper.exe";

/// Local file name of the dumper artifact
pub const DUMPER_NAME: &str = "cs2-dumper.exe";

/// Log file the dumper may leave behind
pub const DUMPER_LOG_NAME: &str = "cs2-dumper.log";

/// Directory the dumper writes its JSON into
pub const OUTPUT_DIR_NAME: &str = "output";

/// Offsets document produced by the dumper
pub const OFFSETS_FILE: &str = "offsets.json";

/// Client schema document produced by the dumper
pub const CLIENT_FILE: &str = "client_dll.json";

/// Configuration for [`crate::OffsetUpdater`]
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Directory all relative paths are resolved against
    pub work_dir: PathBuf,
    /// URL the dumper is downloaded from when absent
    pub dumper_url: String,
    /// File name of the dumper inside `work_dir`
    pub dumper_name: String,
    /// Directory name (inside `work_dir`) the dumper writes to
    pub output_dir_name: String,
    /// File name of the dumper's log inside `work_dir`
    pub log_name: String,
    /// Emitted constants file; relative paths are joined onto `work_dir`
    pub output_path: PathBuf,
    /// Language of the emitted constants file
    pub format: OutputFormat,
    /// Also remove intermediate artifacts when the pipeline fails
    pub cleanup_on_failure: bool,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        let format = OutputFormat::default();
        Self {
            work_dir: PathBuf::from("."),
            dumper_url: DEFAULT_DUMPER_URL.to_string(),
            dumper_name: DUMPER_NAME.to_string(),
            output_dir_name: OUTPUT_DIR_NAME.to_string(),
            log_name: DUMPER_LOG_NAME.to_string(),
            output_path: PathBuf::from(format.default_file_name()),
            format,
            cleanup_on_failure: false,
        }
    }
}

impl UpdaterConfig {
    /// Create a new configuration builder
    pub fn builder() -> UpdaterConfigBuilder {
        UpdaterConfigBuilder::default()
    }

    pub fn dumper_path(&self) -> PathBuf {
        self.work_dir.join(&self.dumper_name)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join(&self.output_dir_name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join(&self.log_name)
    }

    pub fn offsets_path(&self) -> PathBuf {
        self.work_dir.join(OFFSETS_FILE)
    }

    pub fn client_path(&self) -> PathBuf {
        self.work_dir.join(CLIENT_FILE)
    }

    /// Resolved path of the emitted constants file
    pub fn constants_path(&self) -> PathBuf {
        resolve(&self.work_dir, &self.output_path)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Builder for UpdaterConfig
#[derive(Debug, Clone, Default)]
pub struct UpdaterConfigBuilder {
    work_dir: Option<PathBuf>,
    dumper_url: Option<String>,
    output_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    cleanup_on_failure: Option<bool>,
}

impl UpdaterConfigBuilder {
    /// Set the working directory
    pub fn work_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.work_dir = Some(path.into());
        self
    }

    /// Override the dumper download URL
    pub fn dumper_url<S: Into<String>>(mut self, url: S) -> Self {
        self.dumper_url = Some(url.into());
        self
    }

    /// Set the constants file path
    pub fn output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the output language
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Enable or disable cleanup after a failed run
    pub fn cleanup_on_failure(mut self, enabled: bool) -> Self {
        self.cleanup_on_failure = Some(enabled);
        self
    }

    /// Build the configuration
    ///
    /// Without an explicit output path the file name follows the format.
    pub fn build(self) -> UpdaterConfig {
        let default = UpdaterConfig::default();
        let format = self.format.unwrap_or(default.format);
        UpdaterConfig {
            work_dir: self.work_dir.unwrap_or(default.work_dir),
            dumper_url: self.dumper_url.unwrap_or(default.dumper_url),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(format.default_file_name())),
            format,
            cleanup_on_failure: self
                .cleanup_on_failure
                .unwrap_or(default.cleanup_on_failure),
            ..default
        }
    }
}
