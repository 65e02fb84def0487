//! Tool domain module
//!
//! Defines how the model reaches the clinic lookups: every tool is described by
//! a [`ToolDefinition`], requested through a [`ToolCall`], and answered with a
//! [`ToolResult`] that carries the call's correlation token back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        └─ names resolve to the closed ToolKind set
//! ```
//!
//! # Failure model
//!
//! A lookup miss is ordinary output text. Only two things are errors
//! ([`ToolError`]):
//!
//! - the model names a tool that is not registered (`UnknownTool`)
//! - a required argument is missing or not a string (`InvalidArgument`)
//!
//! Both propagate to the caller; nothing is fabricated in their place.

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolKind, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult};
