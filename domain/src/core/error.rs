//! Domain error types

use thiserror::Error;

/// Domain-level validation errors
///
/// These are raised when a caller supplies a value outside one of the
/// closed sets the domain defines (session modes, persona ids).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    #[error("persona_id must be one of: persona_1, persona_2, persona_3 (got {0:?})")]
    InvalidPersona(String),
}

impl DomainError {
    /// Check if this error was caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidMode(_) | DomainError::InvalidPersona(_)
        )
    }
}
