//! Session domain.
//!
//! - [`entities::Session`]: a mutable, id-keyed conversation accumulator
//! - [`mode::SessionMode`]: the closed set of engagement modes
//! - [`persona::PersonaId`]: the three selectable board personas

pub mod entities;
pub mod mode;
pub mod persona;
