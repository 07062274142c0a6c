//! Log targets for progress lines that are not plain levels.
//!
//! Events emitted with these targets are tagged `[SUCCESS]` and `[CLEANUP]`
//! by the CLI formatter instead of their level name.

/// Target for the final success line
pub const SUCCESS: &str = "offsync::success";

/// Target for artifact removal lines
pub const CLEANUP: &str = "offsync::cleanup";
