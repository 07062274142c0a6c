//! # offsync
//!
//! Core library for the offsync offset updater.
//!
//! This crate provides:
//! - Download and execution of the external offset dumper
//! - Parsing of the dumper's `offsets.json` and `client_dll.json`
//! - Flattening into a single name -> offset map with manual overrides
//! - Emission of the map as a constants source file
//!
//! ## Feature Flags
//!
//! - `download`: Enables [`HttpFetcher`], the blocking HTTP downloader.
//!   Without it callers supply their own [`Fetch`] implementation.

pub mod cleanup;
pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod log;
pub mod offset;
pub mod process;
pub mod updater;

pub use cleanup::cleanup;
pub use collect::{REQUIRED_OUTPUTS, collect_outputs};
pub use config::{UpdaterConfig, UpdaterConfigBuilder};
pub use error::{Error, Result};
pub use export::{ConstantsFormat, OutputFormat, PythonClass, RustModule, write_constants};
#[cfg(feature = "download")]
pub use fetch::HttpFetcher;
pub use fetch::{Fetch, ensure_dumper};
pub use offset::{
    BONE_ARRAY_RULE, ClientDocument, LookupPath, MANUAL_OVERRIDES, ManualOverride, OffsetMap,
    OffsetsDocument, RenameRule, build_offset_map, flatten_client, flatten_offsets,
    resolve_overrides,
};
pub use process::{DumperProcess, Launch};
pub use updater::{OffsetUpdater, UpdateReport};
