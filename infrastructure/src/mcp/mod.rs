//! MCP (Model Context Protocol) tool server
//!
//! Exposes the clinic tools to external agent hosts over newline-delimited
//! JSON-RPC 2.0 on stdio.

pub mod protocol;
pub mod server;

pub use server::{McpServer, McpServerError, SERVER_NAME};
