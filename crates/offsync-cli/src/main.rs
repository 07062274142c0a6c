mod cli;
mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use offsync::{DumperProcess, HttpFetcher, OffsetUpdater};
use tracing::{debug, error};

use crate::cli::Args;
use crate::settings::{Settings, resolve_config};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let work_dir = match &args.work_dir {
        Some(dir) => dir.clone(),
        None => executable_dir()?,
    };
    debug!("Running in: {}", work_dir.display());

    let settings = Settings::load(&work_dir.join(&args.config))?;
    let config = resolve_config(work_dir, settings, args);

    let output_name = config
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output_path.display().to_string());

    let updater = OffsetUpdater::new(config);
    let report = updater
        .run(&HttpFetcher::new(), &DumperProcess)
        .with_context(|| format!("Failed to update {}", output_name))?;
    debug!(
        "Wrote {} constants to {}",
        report.entries,
        report.output_path.display()
    );
    Ok(())
}

/// Directory of the running executable, used when no working dir is given
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .context("Executable has no parent directory")
}
