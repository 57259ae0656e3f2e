//! Activity log configuration from TOML (`[activity_log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileActivityLogConfig {
    pub enabled: bool,
    /// JSONL file; defaults to the platform data directory
    pub path: Option<String>,
}

impl Default for FileActivityLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileActivityLogConfig {
    /// Resolved file path, `None` when disabled or no data directory exists
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        match &self.path {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_local_dir()
                .map(|d| d.join("review-autoreply").join("activity.jsonl")),
        }
    }
}
