//! Constants file emitters

mod format;
mod python;
mod rust;

pub use format::ConstantsFormat;
pub use python::PythonClass;
pub use rust::RustModule;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::offset::OffsetMap;

/// Language of the emitted constants file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Python,
    Rust,
}

impl OutputFormat {
    /// File name used when no output path is configured
    pub fn default_file_name(self) -> &'static str {
        match self {
            OutputFormat::Python => "offsets.py",
            OutputFormat::Rust => "offsets.rs",
        }
    }

    pub fn render(self, offsets: &OffsetMap) -> String {
        match self {
            OutputFormat::Python => PythonClass.render(offsets),
            OutputFormat::Rust => RustModule.render(offsets),
        }
    }
}

/// Overwrite `path` with the rendered constants
pub fn write_constants(path: &Path, format: OutputFormat, offsets: &OffsetMap) -> Result<()> {
    let content = format.render(offsets);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!("Wrote {} constants to {}", offsets.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> OffsetMap {
        [("b", 2), ("a", 1), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_write_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("offsets.py");

        write_constants(&path, OutputFormat::Python, &sample()).unwrap();
        let first = fs::read(&path).unwrap();
        write_constants(&path, OutputFormat::Python, &sample()).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "class Offsets:\n    a = 1\n    b = 2\n    c = 3\n"
        );
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("offsets.py");
        fs::write(&path, "class Offsets:\n    stale = 1\n    zz = 9\n").unwrap();

        write_constants(&path, OutputFormat::Python, &sample()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(!content.contains("zz"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gen").join("offsets.rs");

        write_constants(&path, OutputFormat::Rust, &sample()).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with("#[allow"));
    }

    #[test]
    fn test_format_from_config_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = serde_json::from_str(r#"{"format": "rust"}"#).unwrap();
        assert_eq!(w.format, OutputFormat::Rust);
    }
}
