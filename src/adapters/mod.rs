//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Program state from `.obpmc/data/*.json`
//! - `file/` - Board output to `members/readme.md` or stdout

pub mod file;
pub mod json;
