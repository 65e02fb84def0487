//! Tool implementations
//!
//! The four clinic lookups exposed as model-callable tools, the executor
//! that runs them and the JSON Schema converter that describes them.

pub mod clinic;

mod executor;
mod schema;

pub use executor::ClinicToolExecutor;
pub use schema::JsonSchemaToolConverter;

use clinic_domain::tool::entities::{ToolKind, ToolSpec};

/// Create the tool specification with all four clinic tools, in the order
/// they are advertised.
pub fn default_tool_spec() -> ToolSpec {
    ToolKind::ALL
        .into_iter()
        .fold(ToolSpec::new(), |spec, kind| spec.register(clinic::definition(kind)))
}
