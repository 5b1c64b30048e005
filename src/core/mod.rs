//! Core domain logic for pmc-board
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Student, Task, Status, Deadline, ProgramData)
//! - `services/` - Ranking, classification and rendering
//! - `ports/` - Trait definitions for loading state and writing the board

pub mod models;
pub mod ports;
pub mod services;
