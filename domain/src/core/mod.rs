//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative model names (Gemini releases + custom)
//! - [`error::DomainError`]: domain-level validation errors
//! - [`validation::ConfigIssue`]: configuration problems collected at load time

pub mod error;
pub mod model;
pub mod validation;
