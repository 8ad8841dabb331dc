//! Filesystem implementation of the [`OutputSink`] port.
//!
//! Artifacts land in one directory as
//! `<label>_<YYYYmmdd_HHMMSS_mmm>_<seq>.<json|txt>` with a UTC stamp. Files
//! are opened with `create_new`, so an existing artifact is never replaced.

use async_trait::async_trait;
use chartroom_application::{OutputSink, SinkError};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub struct FileOutputSink {
    dir: PathBuf,
    seq: AtomicU64,
}

impl FileOutputSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_path(&self, name: &str, ext: &str) -> PathBuf {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.dir.join(file_name(name, ext, Utc::now(), seq))
    }

    async fn write(&self, name: &str, ext: &str, contents: &[u8]) -> Result<String, SinkError> {
        let write_err = |e: std::io::Error| SinkError::Write {
            name: name.to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.dir).await.map_err(write_err)?;

        loop {
            let path = self.next_path(name, ext);
            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(write_err(e)),
            };
            let written = async {
                file.write_all(contents).await?;
                file.flush().await
            }
            .await;
            if let Err(e) = written {
                drop(file);
                discard(&path).await;
                return Err(write_err(e));
            }

            let locator = path.display().to_string();
            debug!("Wrote {} ({} bytes)", locator, contents.len());
            return Ok(locator);
        }
    }
}

fn file_name(name: &str, ext: &str, now: DateTime<Utc>, seq: u64) -> String {
    format!(
        "{}_{}_{:04}.{}",
        name,
        now.format("%Y%m%d_%H%M%S_%3f"),
        seq,
        ext
    )
}

/// Remove a partially written artifact
async fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        warn!("Could not remove partial artifact {}: {}", path.display(), e);
    }
}

#[async_trait]
impl OutputSink for FileOutputSink {
    async fn write_structured(&self, name: &str, payload: &Value) -> Result<String, SinkError> {
        let body = serde_json::to_vec_pretty(payload).map_err(|e| SinkError::Encode {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.write(name, "json", &body).await
    }

    async fn write_text(&self, name: &str, text: &str) -> Result<String, SinkError> {
        self.write(name, "txt", text.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_file_name_uses_utc_stamp() {
        let now = Utc.with_ymd_and_hms(2026, 11, 1, 1, 30, 5).unwrap();
        assert_eq!(
            file_name("talking_points", "txt", now, 7),
            "talking_points_20261101_013005_000_0007.txt"
        );
    }

    #[tokio::test]
    async fn test_discard_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck_outline_partial.json");
        std::fs::write(&path, "{\"tit").unwrap();

        discard(&path).await;
        assert!(!path.exists());

        // Already gone: only logged
        discard(&path).await;
    }

    #[tokio::test]
    async fn test_structured_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileOutputSink::new(dir.path().join("outputs"));

        let locator = sink
            .write_structured("deck_outline", &json!({"title": "Acme", "slides": []}))
            .await
            .unwrap();

        let path = Path::new(&locator);
        assert!(path.starts_with(sink.dir()));
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("deck_outline_"));
        assert!(file_name.ends_with("_0000.json"));

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\n  \"title\": \"Acme\""));
        let back: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(back["title"], "Acme");
    }

    #[tokio::test]
    async fn test_text_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileOutputSink::new(dir.path());

        let locator = sink
            .write_text("talking_points", "CHARTROOM TALKING POINTS\nMode: x")
            .await
            .unwrap();

        assert!(locator.ends_with(".txt"));
        let content = std::fs::read_to_string(&locator).unwrap();
        assert_eq!(content, "CHARTROOM TALKING POINTS\nMode: x");
    }

    #[tokio::test]
    async fn test_repeated_writes_never_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileOutputSink::new(dir.path());

        let first = sink.write_text("talking_points", "one").await.unwrap();
        let second = sink.write_text("talking_points", "two").await.unwrap();

        assert_ne!(first, second);
        assert!(first < second);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "one");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "two");
    }

    #[tokio::test]
    async fn test_unwritable_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        let sink = FileOutputSink::new(blocker.join("outputs"));

        let err = sink.write_text("talking_points", "x").await.unwrap_err();
        assert!(matches!(err, SinkError::Write { ref name, .. } if name == "talking_points"));
    }
}
