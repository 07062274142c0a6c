//! Rust module output

use super::format::ConstantsFormat;

/// `pub mod offsets` with one `pub const` per offset
#[derive(Debug, Clone, Copy, Default)]
pub struct RustModule;

impl ConstantsFormat for RustModule {
    fn header(&self) -> String {
        "#[allow(non_upper_case_globals)]\npub mod offsets {".to_string()
    }

    fn format_entry(&self, name: &str, value: i64) -> String {
        format!("    pub const {}: i64 = {};", name, value)
    }

    fn placeholder(&self) -> String {
        "    // no offsets".to_string()
    }

    fn footer(&self) -> Option<String> {
        Some("}".to_string())
    }
}
