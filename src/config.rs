//! Report configuration
//!
//! Optional settings live in `.obpmc/report.toml`. Every key has a default, and
//! a missing file means all defaults. Deadlines are shown at a fixed
//! `utc_offset`; the default `+08:00` is Asia/Shanghai.
//!
//! ```toml
//! data_dir = ".obpmc/data"
//! output = "members/readme.md"
//! utc_offset = "+08:00"
//! task_columns = 9
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::RenderOptions;
use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read
    #[error("failed to read {path}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse {path}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// `utc_offset` is not of the form `+HH:MM`
    #[error("invalid utc_offset: {0:?}")]
    InvalidOffset(String),
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory holding the state files, relative to the project root
    pub data_dir: PathBuf,
    /// Report file, relative to the project root
    pub output: PathBuf,
    /// UTC offset deadlines are shown at
    pub utc_offset: String,
    /// Task column count when no students are loaded
    pub task_columns: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(paths::DATA_DIR),
            output: PathBuf::from(paths::OUTPUT_FILE),
            utc_offset: "+08:00".to_string(),
            task_columns: 9,
        }
    }
}

impl ReportConfig {
    /// Load config for a project root, or defaults if there is none
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Absolute data directory for a project root
    #[must_use]
    pub fn data_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }

    /// Absolute report path for a project root
    #[must_use]
    pub fn output_in(&self, root: &Path) -> PathBuf {
        root.join(&self.output)
    }

    /// Parsed UTC offset
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        parse_utc_offset(&self.utc_offset)
            .ok_or_else(|| ConfigError::InvalidOffset(self.utc_offset.clone()))
    }

    /// Render options derived from this config
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        Ok(RenderOptions {
            offset: self.offset()?,
            task_columns: self.task_columns,
        })
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH` (`Z` for UTC)
#[must_use]
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|&c| c != ':').collect();
    if !(digits.len() == 2 || digits.len() == 4) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = if digits.len() == 4 { digits[2..].parse().ok()? } else { 0 };
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
