//! Human-readable reports derived from finalize output.

pub mod talking_points;
