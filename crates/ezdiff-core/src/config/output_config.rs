//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report path. Default: `results.json`.
    pub path: Option<PathBuf>,
    /// Pretty-print the JSON. Default: true.
    pub pretty: Option<bool>,
}

impl OutputConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
    }

    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}
