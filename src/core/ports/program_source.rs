//! Program source port
//!
//! Defines the interface for loading program state.

use super::super::models::ProgramData;

/// Source of program state
///
/// Implementations read the students, rewards, unmerged markers and metadata
/// from wherever they are persisted and hand them over as one read-only
/// context.
#[cfg_attr(test, mockall::automock)]
pub trait ProgramSource: Send + Sync {
    /// Load the full program state
    fn load(&self) -> anyhow::Result<ProgramData>;
}
