//! Domain layer for chartroom
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`Session`] accumulates a founder's (or candidate's) conversation and
//! background context over many turns. It runs in one [`SessionMode`] and,
//! for board sessions, has one selected [`PersonaId`].
//!
//! ## Consensus
//!
//! Finalizing a session asks persona agents for structured critiques and
//! merges them into a single prioritized [`Consensus`]. The board merge is
//! [`merge_reviewer_consensus`]; the single-agent modes project their report
//! into the same shape.

pub mod agent;
pub mod consensus;
pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use agent::{
    AgentResult, BoardChatReplies, CoachReply, DeckOutline, InterviewCoaching,
    InterviewSimulation, InvestorPrepReport, ModelConfig, ModelOutput, ModelSlot,
    ReviewerResponse, SimulatedTurn,
};
pub use consensus::{
    Consensus, MAX_PRIORITIZED, ReviewerBoard, ReviewerEntry, SelectedPath,
    merge_reviewer_consensus,
};
pub use core::{
    error::DomainError,
    model::Model,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use orchestration::value_objects::{
    Artifact, COACH_ID, FinalPayload, ModeReport, PersonaReply, SessionSummary, TurnResponse,
};
pub use prompt::{AgentKind, PromptTemplate, SystemPrompts};
pub use session::{
    entities::{ChannelMeta, ContextUpdate, Session, SessionContext, SessionId},
    mode::SessionMode,
    persona::PersonaId,
};
