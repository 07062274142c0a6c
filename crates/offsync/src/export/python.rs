//! Python class output

use super::format::ConstantsFormat;

/// `class Offsets:` with one class attribute per offset
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonClass;

impl ConstantsFormat for PythonClass {
    fn header(&self) -> String {
        "class Offsets:".to_string()
    }

    fn format_entry(&self, name: &str, value: i64) -> String {
        format!("    {} = {}", name, value)
    }

    fn placeholder(&self) -> String {
        "    pass".to_string()
    }
}
