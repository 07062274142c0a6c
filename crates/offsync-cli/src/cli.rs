//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "offsync")]
#[command(version, about = "Fetch CS2 offsets with cs2-dumper and emit them as constants")]
pub struct Args {
    /// Directory the dumper runs in (defaults to the executable's directory)
    #[arg(short, long, env = "OFFSYNC_WORK_DIR")]
    pub work_dir: Option<PathBuf>,

    /// Optional settings file, relative to the working directory
    #[arg(short, long, default_value = "offsync.toml")]
    pub config: PathBuf,

    /// URL the dumper is downloaded from when it is not present
    #[arg(long, env = "OFFSYNC_DUMPER_URL")]
    pub url: Option<String>,

    /// Language of the emitted constants file
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Constants file to write (defaults to offsets.py / offsets.rs)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also delete intermediate artifacts when the update fails
    #[arg(long)]
    pub cleanup_on_failure: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Python,
    Rust,
}

impl From<ExportFormat> for offsync::OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Python => offsync::OutputFormat::Python,
            ExportFormat::Rust => offsync::OutputFormat::Rust,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["offsync"]).unwrap();
        assert_eq!(args.config, PathBuf::from("offsync.toml"));
        assert!(args.format.is_none());
        assert!(!args.cleanup_on_failure);
    }

    #[test]
    fn test_parse_format_and_output() {
        let args = Args::try_parse_from([
            "offsync",
            "--format",
            "rust",
            "--output",
            "gen/offsets.rs",
            "--cleanup-on-failure",
        ])
        .unwrap();
        assert_eq!(args.format, Some(ExportFormat::Rust));
        assert_eq!(args.output, Some(PathBuf::from("gen/offsets.rs")));
        assert!(args.cleanup_on_failure);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Args::try_parse_from(["offsync", "--format", "lua"]).is_err());
    }
}
