mod document;
mod transform;

pub use document::*;
pub use transform::*;
