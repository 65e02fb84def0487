//! Console output formatter

use crate::output::formatter::OutputFormatter;
use clinic_application::{RunBatchOutput, RunQueryOutput};
use clinic_domain::ToolSpec;
use colored::Colorize;

/// Formats results as colored text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn stats(output: &RunQueryOutput) -> String {
        format!(
            "({} round{}, {} tool call{})",
            output.rounds,
            plural(output.rounds),
            output.tool_calls,
            plural(output.tool_calls)
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_answer(&self, query: &str, output: &RunQueryOutput) -> String {
        format!(
            "{} {}\n\n{}\n\n{}\n",
            "Q:".cyan().bold(),
            query,
            output.answer,
            Self::stats(output).dimmed()
        )
    }

    fn format_batch(&self, batch: &RunBatchOutput) -> String {
        let mut out = String::new();
        out.push_str(&Self::header("Clinic Assistant Demo"));
        out.push('\n');

        for (i, item) in batch.items.iter().enumerate() {
            out.push_str(&format!(
                "\n{} {}\n",
                format!("[{}] Q:", i + 1).cyan().bold(),
                item.query
            ));
            match &item.outcome {
                Ok(output) => {
                    out.push_str(&Self::indent(&output.answer, "    "));
                    out.push_str(&format!("\n    {}\n", Self::stats(output).dimmed()));
                }
                Err(error) => {
                    out.push_str(&format!("    {} {}\n", "Error:".red().bold(), error));
                }
            }
        }

        let summary = format!(
            "{} succeeded, {} failed",
            batch.succeeded(),
            batch.failed()
        );
        let summary = if batch.failed() == 0 {
            summary.green()
        } else {
            summary.yellow()
        };
        out.push_str(&format!("\n{}\n", summary));
        out
    }

    fn format_tools(&self, spec: &ToolSpec) -> String {
        let mut out = String::new();
        for tool in spec.all() {
            out.push_str(&format!("{}\n", tool.name.yellow().bold()));
            out.push_str(&Self::indent(&tool.description, "  "));
            out.push('\n');
            for param in &tool.parameters {
                let required = if param.required { "required" } else { "optional" };
                out.push_str(&format!(
                    "  - {} ({}, {}): {}\n",
                    param.name.bold(),
                    param.param_type,
                    required,
                    param.description
                ));
            }
        }
        out
    }
}
