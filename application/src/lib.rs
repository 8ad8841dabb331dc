//! Application layer for chartroom
//!
//! This crate contains the session orchestrator, the persona agents, the
//! in-memory session store, and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod session_store;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use agents::AgentRuntime;
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    model_invoker::{InvokeError, ModelInvoker},
    output_sink::{OutputSink, SinkError},
};
pub use session_store::SessionStore;
pub use use_cases::orchestrator::{Orchestrator, OrchestratorError};
