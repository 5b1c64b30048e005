//! Centralized path definitions for pmc-board
//!
//! ## Storage Layout
//!
//! ```text
//! project/
//! ├── .obpmc/
//! │   ├── report.toml            # Optional report configuration
//! │   └── data/
//! │       ├── students.json      # people + sequence
//! │       ├── rewards.json       # id -> { total }
//! │       ├── unmerged.json      # id -> task name -> marker
//! │       └── metadata.json      # task.rewardDeadline
//! └── members/
//!     └── readme.md              # Generated board
//! ```

use std::path::{Path, PathBuf};

/// Directory holding program state and configuration
pub const PMC_DIR: &str = ".obpmc";

/// Default data directory, relative to the project root
pub const DATA_DIR: &str = ".obpmc/data";

/// Default report path, relative to the project root
pub const OUTPUT_FILE: &str = "members/readme.md";

/// Report configuration filename (inside [`PMC_DIR`])
const CONFIG_FILE: &str = "report.toml";

const STUDENTS_FILE: &str = "students.json";
const REWARDS_FILE: &str = "rewards.json";
const UNMERGED_FILE: &str = "unmerged.json";
const METADATA_FILE: &str = "metadata.json";

/// Get path to `.obpmc/report.toml`
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(PMC_DIR).join(CONFIG_FILE)
}

/// Get path to `students.json`
#[must_use]
pub fn students_json(data_dir: &Path) -> PathBuf {
    data_dir.join(STUDENTS_FILE)
}

/// Get path to `rewards.json`
#[must_use]
pub fn rewards_json(data_dir: &Path) -> PathBuf {
    data_dir.join(REWARDS_FILE)
}

/// Get path to `unmerged.json`
#[must_use]
pub fn unmerged_json(data_dir: &Path) -> PathBuf {
    data_dir.join(UNMERGED_FILE)
}

/// Get path to `metadata.json`
#[must_use]
pub fn metadata_json(data_dir: &Path) -> PathBuf {
    data_dir.join(METADATA_FILE)
}
