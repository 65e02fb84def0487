//! Anthropic Messages API provider

pub mod gateway;
pub mod types;

pub use gateway::{AnthropicGateway, AnthropicSettings};
