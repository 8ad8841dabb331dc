//! System instruction loading for the persona agents.

mod loader;

pub use loader::LocalPromptLoader;
