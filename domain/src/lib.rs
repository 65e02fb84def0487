//! Domain layer for clinic-assist
//!
//! This crate contains the clinic data, the lookup rules behind each tool and
//! the conversation types shared by the outer layers. It has no dependencies
//! on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Clinic
//!
//! Four read-only tables (FAQ, appointments, lab results, doctors) and the
//! pure lookup functions over them. A miss is rendered text, never an error.
//!
//! ## Tools
//!
//! The lookups are exposed to the model as named tools. Names resolve to the
//! closed [`ToolKind`] set; anything else fails fast with
//! [`ToolError::UnknownTool`].
//!
//! ## Conversation
//!
//! One query is an append-only [`Conversation`] of user, assistant and
//! tool-result turns, discarded once the final answer is produced.

pub mod clinic;
pub mod core;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use clinic::{
    Appointment, Doctor, FaqEntry, LabResult, check_faq, find_doctor, lookup_appointment,
    lookup_lab_result,
};
pub use core::{error::DomainError, model::Model, query::Query};
pub use prompt::DEFAULT_SYSTEM_PROMPT;
pub use session::{
    entities::{Conversation, Turn},
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolKind, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
