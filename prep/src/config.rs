// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Run configuration shared by the binaries

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a preparation or report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Directory holding the raw FakeNewsNet files
    pub data_dir: PathBuf,
    /// Where the training set CSV is written
    pub training_set_path: PathBuf,
    /// Root under which `visualization/exports/{graphs,tables}` live
    pub export_root: PathBuf,
    /// Optional replacement for the embedded Dale-Chall easy word list
    pub easy_words_path: Option<PathBuf>,
    /// Decimal places used when rounding table values
    pub decimals: u32,
    /// Whether a JSON run summary is written next to the training set
    pub write_summary: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/raw"),
            training_set_path: PathBuf::from("output/training_set.csv"),
            export_root: PathBuf::from("."),
            easy_words_path: None,
            decimals: 3,
            write_summary: true,
        }
    }
}

impl PrepConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` if given, otherwise start from the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the run summary written alongside the training set
    pub fn summary_path(&self) -> PathBuf {
        self.training_set_path.with_extension("summary.json")
    }
}
