//! Progress reporting for query execution
//!
//! Lines go to stderr so stdout stays clean for answers and JSON.

use clinic_application::{GatewayError, QueryProgressNotifier};
use clinic_domain::util::preview;
use clinic_domain::{ToolCall, ToolResult};
use colored::Colorize;

/// Maximum characters of a tool result shown on one progress line.
const RESULT_PREVIEW_CHARS: usize = 80;

/// Reports rounds, tool calls and retries as they happen
#[derive(Debug, Default)]
pub struct ProgressReporter {
    show_rounds: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print a line before every model request.
    pub fn with_rounds(mut self, show: bool) -> Self {
        self.show_rounds = show;
        self
    }

    fn format_call(call: &ToolCall) -> String {
        let mut args: Vec<_> = call.arguments.iter().collect();
        args.sort_by(|a, b| a.0.cmp(b.0));
        let args = args
            .into_iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!("{}={:?}", k, s),
                None => format!("{}={}", k, v),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", call.tool_name, args)
    }

    fn tool_call_line(round: usize, call: &ToolCall) -> String {
        format!(
            "  {} {} {}",
            format!("[round {}]", round).dimmed(),
            "->".cyan(),
            Self::format_call(call)
        )
    }

    fn tool_result_line(round: usize, result: &ToolResult) -> String {
        format!(
            "  {} {} {}: {}",
            format!("[round {}]", round).dimmed(),
            "<-".green(),
            result.tool_name,
            preview(result.output(), RESULT_PREVIEW_CHARS)
        )
    }
}

impl QueryProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize) {
        if self.show_rounds {
            eprintln!("{} round {}", "..".dimmed(), round);
        }
    }

    fn on_retry(&self, round: usize, attempt: u32, error: &GatewayError) {
        eprintln!(
            "  {} round {} retry {} after: {}",
            "!".yellow().bold(),
            round,
            attempt,
            error
        );
    }

    fn on_tool_call(&self, round: usize, call: &ToolCall) {
        eprintln!("{}", Self::tool_call_line(round, call));
    }

    fn on_tool_result(&self, round: usize, result: &ToolResult) {
        eprintln!("{}", Self::tool_result_line(round, result));
    }

    fn on_query_complete(&self, rounds: usize, tool_calls: usize) {
        eprintln!(
            "{} answered in {} round(s) with {} tool call(s)",
            "v".green(),
            rounds,
            tool_calls
        );
    }

    fn on_batch_query_start(&self, index: usize, total: usize, query: &str) {
        eprintln!(
            "\n{} {}",
            format!("[{}/{}]", index, total).cyan().bold(),
            query
        );
    }

    fn on_batch_query_failed(&self, index: usize, error: &str) {
        eprintln!("{} query {} failed: {}", "x".red(), index, error);
    }
}
