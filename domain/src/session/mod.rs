//! Conversation domain.
//!
//! - [`entities::Conversation`]: the append-only turn history of one query
//! - [`response::LlmResponse`]: a structured model completion (text + tool use)

pub mod entities;
pub mod response;
