//! Application-level configuration.
//!
//! - [`ExecutionParams`]: loop control (round cap, timeouts, retry, tool concurrency)
//! - [`QuerySettings`]: what each model request carries besides the conversation

pub mod execution_params;
pub mod query_settings;

pub use execution_params::ExecutionParams;
pub use query_settings::QuerySettings;
