//! Run Batch use case.
//!
//! Runs independent queries one after another through
//! [`RunQueryUseCase`]. A failed query is logged and recorded; the batch
//! moves on to the next one.

use crate::config::QuerySettings;
use crate::ports::progress::QueryProgressNotifier;
use crate::use_cases::run_query::{RunQueryInput, RunQueryOutput, RunQueryUseCase};
use clinic_domain::Query;
use tracing::{info, warn};

/// Queries used when the demo is run without arguments.
pub const DEMO_QUERIES: [&str; 6] = [
    "What are your hours?",
    "Is APT-101 confirmed?",
    "What's the status of LAB-202?",
    "Tell me about Dr. Smith",
    "Is APT-101 confirmed and what are your office hours?",
    "I have APT-102 scheduled. What doctor will I see and are they accepting new patients?",
];

/// Outcome of one batch query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub query: String,
    /// The answer, or the error text if the query failed.
    pub outcome: Result<RunQueryOutput, String>,
}

/// Result of a batch run, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunBatchOutput {
    pub items: Vec<BatchItem>,
}

impl RunBatchOutput {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }
}

/// Use case for running a list of queries.
#[derive(Clone)]
pub struct RunBatchUseCase {
    run_query: RunQueryUseCase,
}

impl RunBatchUseCase {
    pub fn new(run_query: RunQueryUseCase) -> Self {
        Self { run_query }
    }

    /// Run every query with a fresh conversation.
    pub async fn execute(
        &self,
        queries: &[String],
        settings: &QuerySettings,
        progress: &dyn QueryProgressNotifier,
    ) -> RunBatchOutput {
        let total = queries.len();
        info!("Starting batch of {} queries", total);

        let mut items = Vec::with_capacity(total);
        for (i, text) in queries.iter().enumerate() {
            let index = i + 1;
            progress.on_batch_query_start(index, total, text);

            let outcome = match Query::new(text.as_str()) {
                Ok(query) => self
                    .run_query
                    .execute(RunQueryInput::new(query, settings.clone()), progress)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            if let Err(error) = &outcome {
                warn!("Query {}/{} failed: {}", index, total, error);
                progress.on_batch_query_failed(index, error);
            }

            items.push(BatchItem {
                query: text.clone(),
                outcome,
            });
        }

        let output = RunBatchOutput { items };
        info!(
            "Batch complete: {} succeeded, {} failed",
            output.succeeded(),
            output.failed()
        );
        output
    }
}
