//! The update pipeline
//!
//! [`OffsetUpdater::run`] drives the stages strictly in order:
//! fetch, launch, collect, transform, emit, cleanup. Any error aborts the
//! remaining stages and is returned unchanged.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::cleanup::cleanup;
use crate::collect::collect_outputs;
use crate::config::UpdaterConfig;
use crate::error::Result;
use crate::export::write_constants;
use crate::fetch::{Fetch, ensure_dumper};
use crate::log::SUCCESS;
use crate::offset::{ClientDocument, OffsetsDocument, build_offset_map};
use crate::process::Launch;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// The written constants file
    pub output_path: PathBuf,
    /// Number of constants written
    pub entries: usize,
    /// Intermediate artifacts removed afterwards
    pub removed: Vec<PathBuf>,
}

/// Stateless service exposing the update pipeline
#[derive(Debug, Clone)]
pub struct OffsetUpdater {
    config: UpdaterConfig,
}

impl OffsetUpdater {
    pub fn new(config: UpdaterConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline.
    ///
    /// On failure intermediate artifacts are left in place for diagnosis
    /// unless `cleanup_on_failure` is set.
    pub fn run(&self, fetcher: &dyn Fetch, launcher: &dyn Launch) -> Result<UpdateReport> {
        let (output_path, entries) = match self.update(fetcher, launcher) {
            Ok(written) => written,
            Err(e) => {
                if self.config.cleanup_on_failure {
                    if let Err(cleanup_err) = cleanup(&self.config) {
                        warn!("Cleanup after failure also failed: {}", cleanup_err);
                    }
                }
                return Err(e);
            }
        };

        let removed = cleanup(&self.config)?;
        Ok(UpdateReport {
            output_path,
            entries,
            removed,
        })
    }

    fn update(&self, fetcher: &dyn Fetch, launcher: &dyn Launch) -> Result<(PathBuf, usize)> {
        let config = &self.config;

        let exe = ensure_dumper(fetcher, config)?;
        launcher.launch(&exe, &config.work_dir)?;
        collect_outputs(config)?;

        let offsets = OffsetsDocument::load(config.offsets_path())?;
        let client = ClientDocument::load(config.client_path())?;
        let merged = build_offset_map(&offsets, &client)?;

        let output_path = config.constants_path();
        write_constants(&output_path, config.format, &merged)?;

        let name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| output_path.display().to_string());
        info!(target: SUCCESS, "{} updated successfully.", name);

        Ok((output_path, merged.len()))
    }
}
