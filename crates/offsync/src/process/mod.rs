//! Dumper process execution

mod runner;

pub use runner::*;
