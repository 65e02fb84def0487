//! Presentation layer for clinic-assist
//!
//! This crate contains CLI definitions, output formatters and the
//! progress reporter. Answers go to stdout; progress goes to stderr.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::json::JsonFormatter;
pub use progress::reporter::ProgressReporter;
