//! Dumper JSON documents
//!
//! Maps are kept in JSON insertion order so flattening overwrites in the
//! same order the dumper wrote the entries.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

/// `offsets.json`: module name -> symbol name -> offset
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct OffsetsDocument {
    pub modules: IndexMap<String, IndexMap<String, i64>>,
}

/// `client_dll.json`: module name -> class schema
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ClientDocument {
    pub modules: IndexMap<String, ModuleSchema>,
}

/// One module of the client document. Keys other than `classes` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleSchema {
    #[serde(default)]
    pub classes: Option<IndexMap<String, ClassSchema>>,
}

/// One class of a module. Keys other than `fields` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassSchema {
    #[serde(default)]
    pub fields: Option<IndexMap<String, i64>>,
}

impl OffsetsDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path.as_ref())
    }

    pub fn symbol(&self, module: &str, symbol: &str) -> Option<i64> {
        self.modules.get(module)?.get(symbol).copied()
    }
}

impl ClientDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path.as_ref())
    }

    pub fn field(&self, module: &str, class: &str, field: &str) -> Option<i64> {
        self.modules
            .get(module)?
            .classes
            .as_ref()?
            .get(class)?
            .fields
            .as_ref()?
            .get(field)
            .copied()
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    let doc = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Parsed {}", path.display());
    Ok(doc)
}
