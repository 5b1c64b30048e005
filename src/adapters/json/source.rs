//! Loads program state from the JSON files in the data directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::models::{Metadata, ProgramData, RewardMap, Roster, UnmergedMap};
use crate::core::ports::ProgramSource;
use crate::paths;

/// Errors that can occur while reading a state file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {path}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not the expected JSON shape
    #[error("failed to parse {path}")]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Read and deserialize one JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    log::debug!("Reading {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Program state stored as JSON files in one directory
#[derive(Debug, Clone)]
pub struct JsonProgramSource {
    data_dir: PathBuf,
}

impl JsonProgramSource {
    /// Create a source reading from `data_dir`
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory the state files are read from
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load all four state files
    pub fn load_all(&self) -> Result<ProgramData, LoadError> {
        let roster: Roster = read_json(&paths::students_json(&self.data_dir))?;
        let rewards: RewardMap = read_json(&paths::rewards_json(&self.data_dir))?;
        let unmerged: UnmergedMap = read_json(&paths::unmerged_json(&self.data_dir))?;
        let metadata: Metadata = read_json(&paths::metadata_json(&self.data_dir))?;

        Ok(ProgramData {
            roster,
            rewards,
            unmerged,
            metadata,
        })
    }
}

impl ProgramSource for JsonProgramSource {
    fn load(&self) -> anyhow::Result<ProgramData> {
        Ok(self.load_all()?)
    }
}
