//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`ranking`] - Order students by registration and task progress
//! - [`classifier`] - Map a cell's facts to its status symbol
//! - [`renderer`] - Render the markdown board
//! - [`report`] - Run the full pipeline

pub mod classifier;
pub mod ranking;
pub mod renderer;
pub mod report;

pub use classifier::{classify, classify_registration};
pub use ranking::{compare_progress, rank};
pub use renderer::{BoardRow, RenderOptions, build_rows, render_report};
pub use report::{Report, ReportError, build_report};
