//! JSONL file writer for usage records.
//!
//! Each [`UsageRecord`] is serialized as a single JSON line with
//! `"type": "usage"` followed by the record fields. The file is opened in
//! append mode, so audit history survives restarts.

use cognify_application::ports::usage_recorder::UsageRecorder;
use cognify_domain::UsageRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Default audit log location, relative to the working directory.
pub const DEFAULT_USAGE_LOG_PATH: &str = "logs/cost_audit.jsonl";

/// JSONL usage logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record
/// and on `Drop`.
pub struct JsonlUsageLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlUsageLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create usage log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open usage log file {}: {}", path.display(), e);
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
}

impl UsageRecorder for JsonlUsageLogger {
    fn record(&self, record: UsageRecord) {
        let mut line = serde_json::Map::new();
        line.insert("type".to_string(), serde_json::Value::from("usage"));
        match serde_json::to_value(&record) {
            Ok(serde_json::Value::Object(fields)) => line.extend(fields),
            Ok(_) => return,
            Err(e) => {
                warn!("Could not serialize usage record: {}", e);
                return;
            }
        }

        let Ok(line) = serde_json::to_string(&line) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line) {
                warn!("Could not write usage record: {}", e);
            }
            // Flush per record; JSONL is append-only
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlUsageLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
