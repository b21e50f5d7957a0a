//! Game transcripts as JSON Lines.
//!
//! Every [`ConversationEvent`] becomes one line: the payload fields plus
//! `type` and an RFC3339 `timestamp`. Payloads that are not JSON objects are
//! nested under `data`.

use serde_json::{Map, Value, json};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};
use twentyq_application::{ConversationEvent, ConversationLogger};

/// Transcript logger backed by a single `.jsonl` file.
///
/// Lines are flushed as they are written, so a transcript survives a crash
/// mid-game.
pub struct JsonlConversationLogger {
    out: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (truncating) a transcript at `path`, creating parent directories.
    ///
    /// Failures are logged and reported as `None`; a game never fails
    /// because its transcript could not be written.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref().to_path_buf();

        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir
            && let Err(e) = fs::create_dir_all(dir)
        {
            warn!("Cannot create transcript directory {}: {}", dir.display(), e);
            return None;
        }

        let file = File::create(&path)
            .inspect_err(|e| warn!("Cannot create transcript {}: {}", path.display(), e))
            .ok()?;

        debug!("Game transcript: {}", path.display());
        Some(Self {
            out: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    /// Open a transcript named after the current local time inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Option<Self> {
        let name = chrono::Local::now()
            .format("%Y%m%d-%H%M%S.game.jsonl")
            .to_string();
        Self::new(dir.as_ref().join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Flatten an event into the record written on one line.
fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(fields) => fields,
        other => {
            let mut wrapped = Map::new();
            wrapped.insert("data".into(), other);
            wrapped
        }
    };
    record.insert("type".into(), json!(event.event_type));
    record.insert("timestamp".into(), json!(timestamp));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, now);

        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if serde_json::to_writer(&mut *out, &record).is_ok() {
            let _ = out.write_all(b"\n");
            let _ = out.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(out) = self.out.get_mut() {
            let _ = out.flush();
        }
    }
}
