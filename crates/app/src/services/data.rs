use std::path::Path;

use heatmap_core::ActivityRecord;
use heatmap_engine::assign_levels;

use crate::error::{AppError, Result};
use crate::services::SharedConfig;

pub fn parse_series(json: &str) -> serde_json::Result<Vec<ActivityRecord>> {
    serde_json::from_str(json)
}

pub fn load_series(path: &Path) -> Result<Vec<ActivityRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    parse_series(&contents).map_err(|source| AppError::ParseData {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Clone)]
pub struct DataService {
    config: SharedConfig,
}

impl DataService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// Reads the series from disk on every call so edits show up without
    /// a restart.
    pub fn load(&self) -> Result<Vec<ActivityRecord>> {
        let mut series = load_series(&self.config.data_path)?;
        if self.config.requantize {
            assign_levels(&mut series);
        }
        tracing::debug!(
            records = series.len(),
            path = %self.config.data_path.display(),
            "loaded activity series"
        );
        Ok(series)
    }
}
