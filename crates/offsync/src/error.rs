use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    #[error("Failed to launch {}", .path.display())]
    DumperSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dumper exited with {status}")]
    DumperExit { status: String },

    #[error("{file} not found in {}", .dir.display())]
    MissingOutput { file: String, dir: PathBuf },

    #[error("Offset overflow adjusting {class}::{field} ({value})")]
    OffsetOverflow {
        class: String,
        field: String,
        value: i64,
    },

    #[error("Missing key: {path}")]
    MissingKey { path: String },

    #[error("Failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::MissingOutput { .. } => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
