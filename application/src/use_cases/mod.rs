//! Use cases (application services)
//!
//! The [`orchestrator::Orchestrator`] exposes every session operation.
//! Finalize and live replies are split into their own modules.

mod finalize;
pub mod orchestrator;
mod respond;
