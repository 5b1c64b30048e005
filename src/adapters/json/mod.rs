//! JSON program state
//!
//! Implements `ProgramSource` over the `.obpmc/data/*.json` state files.

mod source;

pub use source::{JsonProgramSource, LoadError, read_json};
