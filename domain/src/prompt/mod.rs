//! Prompt domain
//!
//! Agent identities, their system instructions, and the user prompt each
//! agent call is built from.

pub mod agent;
mod template;

pub use agent::{AgentKind, SystemPrompts};
pub use template::PromptTemplate;
