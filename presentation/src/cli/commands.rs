//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for clinic-assist
#[derive(Parser, Debug)]
#[command(name = "clinic-assist")]
#[command(author, version, about = "Healthcare assistant demo with clinic lookup tools")]
#[command(long_about = r#"
clinic-assist answers patient questions with a model that can call four
clinic lookup tools: FAQ, appointments, lab results and doctors.

It can also serve those tools to another agent host over MCP (stdio).

Configuration files are loaded from (in priority order):
1. CLINIC_* environment variables (e.g. CLINIC_EXECUTION__MAX_ROUNDS=5)
2. --config <path>     Explicit config file
3. ./clinic.toml       Project-level config
4. ~/.config/clinic-assist/config.toml   Global config

Example:
  clinic-assist ask "Is APT-101 confirmed?"
  clinic-assist demo
  clinic-assist serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Model to use (overrides [provider] model)
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum model requests per query (overrides [execution] max_rounds)
    #[arg(long, global = true, value_name = "N")]
    pub max_rounds: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer a single question
    Ask {
        /// The patient's question
        query: String,
    },
    /// Run a list of questions one after another (built-in demo set if none given)
    Demo {
        queries: Vec<String>,
    },
    /// Serve the clinic tools over MCP on stdin/stdout
    Serve,
    /// List the registered tools
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_with_global_flags() {
        let cli = Cli::try_parse_from([
            "clinic-assist",
            "-vv",
            "ask",
            "Is APT-101 confirmed?",
            "--max-rounds",
            "3",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Ask {
                query: "Is APT-101 confirmed?".to_string()
            }
        );
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.max_rounds, Some(3));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_demo_defaults_to_no_queries() {
        let cli = Cli::try_parse_from(["clinic-assist", "demo"]).unwrap();
        assert_eq!(cli.command, Command::Demo { queries: vec![] });
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_ask_requires_query() {
        assert!(Cli::try_parse_from(["clinic-assist", "ask"]).is_err());
        assert!(Cli::try_parse_from(["clinic-assist"]).is_err());
    }
}
