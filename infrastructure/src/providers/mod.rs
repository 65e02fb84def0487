//! Model service providers

pub mod anthropic;

pub use anthropic::{AnthropicGateway, AnthropicSettings};
