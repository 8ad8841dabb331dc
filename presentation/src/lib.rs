//! Presentation layer for chartroom
//!
//! This crate contains the CLI definitions, the axum JSON API and the SMS
//! webhook adapter.

pub mod cli;
pub mod server;
pub mod sms;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use server::{ApiError, AppState, router, serve};
pub use sms::SmsSessions;
