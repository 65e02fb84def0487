//! CLI entrypoint for clinic-assist
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use clinic_application::{
    DEMO_QUERIES, NoQueryProgress, QueryProgressNotifier, RunBatchUseCase, RunQueryInput,
    RunQueryUseCase, ToolExecutorPort,
};
use clinic_domain::Query;
use clinic_infrastructure::{
    AnthropicGateway, ClinicToolExecutor, ConfigLoader, FileConfig, JsonSchemaToolConverter,
    JsonlConversationLogger, McpServer, Severity,
};
use clinic_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter, ProgressReporter,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("configuration error: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(&cli, &config)?;
    info!("Starting clinic-assist");

    // CLI flags override file config
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.execution.max_rounds = max_rounds;
    }
    check_config(&config)?;

    let executor = Arc::new(ClinicToolExecutor::new());
    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    match cli.command.clone() {
        Command::Tools => {
            print!("{}", formatter.format_tools(executor.tool_spec()));
            Ok(())
        }
        Command::Serve => {
            let server = McpServer::new(executor);
            server.serve_stdio().await?;
            Ok(())
        }
        Command::Ask { query } => {
            let use_case = build_use_case(&config, executor)?;
            let settings = config.to_query_settings();
            let input = RunQueryInput::new(Query::new(query.as_str())?, settings);

            let reporter = progress(&cli);
            let output = use_case.execute(input, reporter.as_ref()).await?;
            println!("{}", formatter.format_answer(&query, &output));
            Ok(())
        }
        Command::Demo { queries } => {
            let queries: Vec<String> = if queries.is_empty() {
                DEMO_QUERIES.iter().map(|q| q.to_string()).collect()
            } else {
                queries
            };

            let use_case = RunBatchUseCase::new(build_use_case(&config, executor)?);
            let settings = config.to_query_settings();

            let reporter = progress(&cli);
            let batch = use_case
                .execute(&queries, &settings, reporter.as_ref())
                .await;
            println!("{}", formatter.format_batch(&batch));

            if batch.succeeded() == 0 && !batch.items.is_empty() {
                bail!("all {} queries failed", batch.failed());
            }
            Ok(())
        }
    }
}

/// Initialize tracing on stderr, plus a daily-rolling file when `[logging] dir` is set.
///
/// `RUST_LOG` wins over the `-v` count when set.
fn init_tracing(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "clinic-assist.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log warnings and refuse to start on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("config {}", issue),
            Severity::Error => eprintln!("config {}", issue),
        }
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("invalid configuration");
    }
    Ok(())
}

fn build_use_case(config: &FileConfig, executor: Arc<ClinicToolExecutor>) -> Result<RunQueryUseCase> {
    let settings = config.provider.to_anthropic_settings()?;
    let gateway = AnthropicGateway::new(settings)?;
    info!("Using model service at {}", gateway.endpoint());

    let mut use_case = RunQueryUseCase::new(
        Arc::new(gateway),
        executor,
        Arc::new(JsonSchemaToolConverter),
    );

    if let Some(path) = &config.logging.conversation_log {
        let logger = JsonlConversationLogger::open(path)
            .with_context(|| format!("cannot open conversation log {}", path.display()))?;
        info!("Writing conversation transcript to {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    Ok(use_case)
}

fn progress(cli: &Cli) -> Box<dyn QueryProgressNotifier> {
    if cli.quiet {
        Box::new(NoQueryProgress)
    } else {
        Box::new(ProgressReporter::new().with_rounds(cli.verbose > 0))
    }
}
