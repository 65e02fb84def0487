//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use clinic_application::{RunBatchOutput, RunQueryOutput};
use clinic_domain::ToolSpec;
use serde_json::{Value, json};

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_answer(&self, query: &str, output: &RunQueryOutput) -> String {
        Self::render(&json!({
            "query": query,
            "answer": output.answer,
            "rounds": output.rounds,
            "tool_calls": output.tool_calls,
        }))
    }

    fn format_batch(&self, batch: &RunBatchOutput) -> String {
        let items: Vec<Value> = batch
            .items
            .iter()
            .map(|item| match &item.outcome {
                Ok(output) => json!({
                    "query": item.query,
                    "answer": output.answer,
                    "rounds": output.rounds,
                    "tool_calls": output.tool_calls,
                }),
                Err(error) => json!({
                    "query": item.query,
                    "error": error,
                }),
            })
            .collect();

        Self::render(&json!({
            "results": items,
            "succeeded": batch.succeeded(),
            "failed": batch.failed(),
        }))
    }

    fn format_tools(&self, spec: &ToolSpec) -> String {
        let tools: Vec<_> = spec.all().collect();
        Self::render(&json!({ "tools": tools }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_application::BatchItem;
    use clinic_domain::{ToolDefinition, ToolParameter};

    #[test]
    fn test_format_answer() {
        let output = RunQueryOutput {
            answer: "Status: confirmed".to_string(),
            rounds: 2,
            tool_calls: 1,
        };
        let value: Value =
            serde_json::from_str(&JsonFormatter.format_answer("APT-101?", &output)).unwrap();
        assert_eq!(value["query"], "APT-101?");
        assert_eq!(value["answer"], "Status: confirmed");
        assert_eq!(value["rounds"], 2);
    }

    #[test]
    fn test_format_batch_separates_errors() {
        let batch = RunBatchOutput {
            items: vec![
                BatchItem {
                    query: "hours".to_string(),
                    outcome: Ok(RunQueryOutput {
                        answer: "8AM".to_string(),
                        rounds: 1,
                        tool_calls: 0,
                    }),
                },
                BatchItem {
                    query: "LAB-202".to_string(),
                    outcome: Err("Query timed out after 300s".to_string()),
                },
            ],
        };

        let value: Value = serde_json::from_str(&JsonFormatter.format_batch(&batch)).unwrap();
        assert_eq!(value["succeeded"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["results"][0]["answer"], "8AM");
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(value["results"][1]["error"], "Query timed out after 300s");
    }

    #[test]
    fn test_format_tools() {
        let spec = ToolSpec::new().register(
            ToolDefinition::new("find_doctor", "Find a doctor")
                .with_parameter(ToolParameter::new("doctor_name", "Doctor's name", true)),
        );
        let value: Value = serde_json::from_str(&JsonFormatter.format_tools(&spec)).unwrap();
        assert_eq!(value["tools"][0]["name"], "find_doctor");
        assert_eq!(value["tools"][0]["parameters"][0]["required"], true);
    }
}
