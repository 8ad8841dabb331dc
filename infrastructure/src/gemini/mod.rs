//! Gemini adapter
//!
//! Talks to the Gemini REST API over HTTPS and implements the
//! [`ModelInvoker`](chartroom_application::ModelInvoker) port, including
//! model-name fallback when a requested model is not served.

pub mod client;
pub mod error;
pub mod protocol;
pub mod selection;

pub use client::GeminiInvoker;
pub use error::GeminiError;
pub use selection::ModelSelector;
