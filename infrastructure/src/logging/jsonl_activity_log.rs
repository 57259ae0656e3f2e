//! JSONL file writer for activity records.
//!
//! Each [`ActivityRecord`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use async_trait::async_trait;
use autoreply_application::{ActivityLog, RepositoryError};
use autoreply_domain::ActivityRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL activity log.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlActivityLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlActivityLog {
    /// Open (or create) the log at `path` for appending.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create activity log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open activity log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_line(record: &ActivityRecord) -> Result<String, RepositoryError> {
        let mut value =
            serde_json::to_value(record).map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(record.kind.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(
                    record
                        .created_at
                        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                ),
            );
        }

        serde_json::to_string(&value).map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

#[async_trait]
impl ActivityLog for JsonlActivityLog {
    async fn insert_activity(&self, record: ActivityRecord) -> Result<(), RepositoryError> {
        let line = Self::to_line(&record)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| RepositoryError::Storage("activity log lock poisoned".to_string()))?;
        writeln!(writer, "{}", line).map_err(|e| RepositoryError::Storage(e.to_string()))?;
        // Flush every record for crash safety; the file is append-only
        writer
            .flush()
            .map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

impl Drop for JsonlActivityLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
