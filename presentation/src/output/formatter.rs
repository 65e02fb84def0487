//! Output formatter trait

use clinic_application::{RunBatchOutput, RunQueryOutput};
use clinic_domain::ToolSpec;

/// Trait for formatting command results for stdout
pub trait OutputFormatter {
    /// Format the answer to one query
    fn format_answer(&self, query: &str, output: &RunQueryOutput) -> String;

    /// Format every item of a batch run, in order
    fn format_batch(&self, batch: &RunBatchOutput) -> String;

    /// Format the registered tools
    fn format_tools(&self, spec: &ToolSpec) -> String;
}
