//! Runner: spawn the dumper and wait for it to exit.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

/// Runs a local executable to completion
pub trait Launch {
    fn launch(&self, exe: &Path, work_dir: &Path) -> Result<()>;
}

/// Launches the dumper as a child process with no arguments.
///
/// Only the exit status is inspected; the JSON documents are the
/// filesystem side effect of the dumper itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumperProcess;

impl Launch for DumperProcess {
    fn launch(&self, exe: &Path, work_dir: &Path) -> Result<()> {
        let name = exe
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| exe.display().to_string());

        info!("Running {}...", name);
        let status = Command::new(exe)
            .current_dir(work_dir)
            .status()
            .map_err(|source| Error::DumperSpawn {
                path: exe.to_path_buf(),
                source,
            })?;

        if !status.success() {
            return Err(Error::DumperExit {
                status: status.to_string(),
            });
        }

        info!("{} finished.", name);
        Ok(())
    }
}
