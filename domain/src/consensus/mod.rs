//! Consensus domain
//!
//! How persona outputs become one prioritized summary:
//! [`merge::merge_reviewer_consensus`] for board sessions, and the
//! [`Consensus`] projections for single-agent modes.

pub mod entities;
pub mod merge;
mod projection;

pub use entities::{Consensus, ReviewerBoard, ReviewerEntry, SelectedPath};
pub use merge::{MAX_PRIORITIZED, merge_reviewer_consensus};
