//! Orchestration domain
//!
//! Result types produced by the session operations.

pub mod value_objects;
