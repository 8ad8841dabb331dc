//! Reviewer persona identifiers and their fixed roles.

use crate::agent::model_config::ModelSlot;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three board personas a founder can select.
///
/// Each persona is bound to a fixed reviewer label, review focus and model
/// slot. Ordering follows the role order used when pooling reviewer lists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PersonaId {
    #[default]
    #[serde(rename = "persona_1")]
    Persona1,
    #[serde(rename = "persona_2")]
    Persona2,
    #[serde(rename = "persona_3")]
    Persona3,
}

impl PersonaId {
    /// Role order: pooled lists are concatenated in this order.
    pub const ALL: [PersonaId; 3] = [PersonaId::Persona1, PersonaId::Persona2, PersonaId::Persona3];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaId::Persona1 => "persona_1",
            PersonaId::Persona2 => "persona_2",
            PersonaId::Persona3 => "persona_3",
        }
    }

    /// 1-based position, as typed in SMS keywords ("PERSONA 2")
    pub fn number(&self) -> u8 {
        match self {
            PersonaId::Persona1 => 1,
            PersonaId::Persona2 => 2,
            PersonaId::Persona3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<PersonaId> {
        PersonaId::ALL.into_iter().find(|p| p.number() == n)
    }

    /// Label shown on the structured review
    pub fn reviewer_label(&self) -> &'static str {
        match self {
            PersonaId::Persona1 => "Customer Panel 1",
            PersonaId::Persona2 => "Customer Panel 2",
            PersonaId::Persona3 => "Customer Panel 3",
        }
    }

    /// What this reviewer concentrates on
    pub fn reviewer_focus(&self) -> &'static str {
        match self {
            PersonaId::Persona1 => "Customer Value and Problem Fit",
            PersonaId::Persona2 => "Product Usability and Technical Friction",
            PersonaId::Persona3 => "Adoption, Messaging, and Trust Signals",
        }
    }

    /// Label used for conversational (live chat) replies
    pub fn panel_label(&self) -> &'static str {
        match self {
            PersonaId::Persona1 => "Panel 1",
            PersonaId::Persona2 => "Panel 2",
            PersonaId::Persona3 => "Panel 3",
        }
    }

    /// Model slot this reviewer runs on
    pub fn model_slot(&self) -> ModelSlot {
        match self {
            PersonaId::Persona1 => ModelSlot::ReviewerA,
            PersonaId::Persona2 => ModelSlot::ReviewerB,
            PersonaId::Persona3 => ModelSlot::ReviewerC,
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonaId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::InvalidPersona(s.to_string()))
    }
}
