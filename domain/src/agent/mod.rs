//! Agent domain module
//!
//! Model roles, raw model output, and the typed results each persona agent
//! decodes from it.

pub mod model_config;
pub mod output;
pub mod results;

pub use model_config::{ModelConfig, ModelSlot};
pub use output::ModelOutput;
pub use results::{
    AgentResult, BoardChatReplies, CoachReply, DeckOutline, InterviewCoaching,
    InterviewSimulation, InvestorPrepReport, ReviewerResponse, SimulatedTurn,
};
