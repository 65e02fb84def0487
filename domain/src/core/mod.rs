//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Claude models the assistant can be driven by
//! - [`query::Query`]: a validated patient query
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
