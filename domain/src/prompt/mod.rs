//! Prompt domain
//!
//! Instructions given to the model alongside the tool descriptors.

mod assistant;

pub use assistant::DEFAULT_SYSTEM_PROMPT;
