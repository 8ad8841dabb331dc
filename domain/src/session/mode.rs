//! Session mode definitions.
//!
//! The mode is chosen once at session start and decides which finalize
//! pipeline runs:
//!
//! | Mode | Finalize pipeline | Live chat |
//! |------|-------------------|-----------|
//! | `board_investors` | pitch builder → 3 reviewers → consensus merge | three panel replies |
//! | `interview_1on1` | interview coach → projection | single coach reply |
//! | `investor_pitch_prep` | investor prep → projection | single coach reply |

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of engagement modes a session can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMode {
    /// Founder pitches to a board of three reviewer personas
    #[serde(rename = "board_investors")]
    BoardInvestors,
    /// One-on-one interview coaching
    #[serde(rename = "interview_1on1")]
    Interview1on1,
    /// Preparation for investor meetings
    #[serde(rename = "investor_pitch_prep")]
    InvestorPitchPrep,
}

impl SessionMode {
    /// All modes, in menu order (matches the SMS `1`/`2`/`3` keywords)
    pub const ALL: [SessionMode; 3] = [
        SessionMode::BoardInvestors,
        SessionMode::Interview1on1,
        SessionMode::InvestorPitchPrep,
    ];

    /// Wire identifier of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::BoardInvestors => "board_investors",
            SessionMode::Interview1on1 => "interview_1on1",
            SessionMode::InvestorPitchPrep => "investor_pitch_prep",
        }
    }

    /// Label used for the single coach reply in non-board modes
    pub fn coach_label(&self) -> &'static str {
        match self {
            SessionMode::Interview1on1 => "Interview Coach",
            _ => "Pitch Coach",
        }
    }

    /// Check if this mode runs the multi-reviewer board
    pub fn is_board(&self) -> bool {
        matches!(self, SessionMode::BoardInvestors)
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionMode {
    type Err = DomainError;

    /// Exact, case-sensitive match against the wire identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| DomainError::InvalidMode(s.to_string()))
    }
}
