//! Output Sink port
//!
//! Durable storage for finalize artifacts. Every write yields a new,
//! time-ordered locator; nothing is ever overwritten.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write artifact {name}: {reason}")]
    Write { name: String, reason: String },

    #[error("Failed to encode artifact {name}: {reason}")]
    Encode { name: String, reason: String },
}

#[async_trait]
pub trait OutputSink: Send + Sync {
    /// Store a JSON document under a label, returning its locator
    async fn write_structured(&self, name: &str, payload: &Value) -> Result<String, SinkError>;

    /// Store a plain text document under a label, returning its locator
    async fn write_text(&self, name: &str, text: &str) -> Result<String, SinkError>;
}
