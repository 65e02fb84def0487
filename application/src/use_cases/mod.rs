//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_batch;
pub mod run_query;
pub(crate) mod shared;
