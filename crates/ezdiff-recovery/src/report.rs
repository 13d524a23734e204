//! JSON report keyed by sample size.
//!
//! ```json
//! {
//!   "10": { "biases": [..3], "squared_errors": [..3], ... },
//!   "2":  { "biases": null, "squared_errors": null, "valid_iterations": 0, ... },
//!   "40": { ... }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ezdiff_core::ReportError;
use serde::{Deserialize, Serialize};

use crate::summary::ConditionSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudyReport {
    conditions: BTreeMap<u32, ConditionSummary>,
}

impl StudyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a summary, replacing any earlier one for the same sample size.
    pub fn insert(&mut self, summary: ConditionSummary) {
        self.conditions.insert(summary.sample_size, summary);
    }

    pub fn get(&self, sample_size: u32) -> Option<&ConditionSummary> {
        self.conditions.get(&sample_size)
    }

    /// Summaries in ascending sample-size order.
    pub fn conditions(&self) -> impl Iterator<Item = &ConditionSummary> {
        self.conditions.values()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Study seed, as recorded on the conditions.
    pub fn seed(&self) -> Option<u64> {
        self.conditions.values().find_map(|c| c.seed)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ReportError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write the report, creating parent directories as needed.
    pub fn write(&self, path: &Path, pretty: bool) -> Result<(), ReportError> {
        let io_err = |source| ReportError::Io {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut json = self.to_json(pretty)?;
        json.push('\n');
        std::fs::write(path, json).map_err(io_err)?;
        tracing::info!(path = %path.display(), conditions = self.len(), "report written");
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
