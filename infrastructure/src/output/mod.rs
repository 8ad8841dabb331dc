//! Artifact persistence
//!
//! Provides [`FileOutputSink`], the filesystem implementation of the
//! [`OutputSink`](chartroom_application::OutputSink) port.

mod file_sink;

pub use file_sink::FileOutputSink;
