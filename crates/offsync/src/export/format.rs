//! ConstantsFormat trait definition

use crate::offset::OffsetMap;

/// Trait for constants file languages
///
/// Every format wraps the entries in a single container and keeps the
/// container syntactically valid when the map is empty.
pub trait ConstantsFormat {
    /// Opening line(s) of the container
    fn header(&self) -> String;

    /// Format a single constant
    fn format_entry(&self, name: &str, value: i64) -> String;

    /// No-op body used when there are no constants
    fn placeholder(&self) -> String;

    /// Closing line(s) of the container, if the language needs any
    fn footer(&self) -> Option<String> {
        None
    }

    /// Render the whole file, one entry per line in name order
    fn render(&self, offsets: &OffsetMap) -> String {
        let mut output = self.header();
        output.push('\n');
        if offsets.is_empty() {
            output.push_str(&self.placeholder());
            output.push('\n');
        }
        for (name, value) in offsets {
            output.push_str(&self.format_entry(name, *value));
            output.push('\n');
        }
        if let Some(footer) = self.footer() {
            output.push_str(&footer);
            output.push('\n');
        }
        output
    }
}
