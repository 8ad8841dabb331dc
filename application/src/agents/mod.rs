//! Persona agents.
//!
//! Each agent builds a role-specific prompt from session context, calls the
//! model through [`AgentRuntime`], and decodes a typed result. Agents are
//! stateless given their inputs.

pub mod coaching;
pub mod live_chat;
pub mod pitch_builder;
pub mod reviewer_board;
mod runtime;

pub use runtime::AgentRuntime;
