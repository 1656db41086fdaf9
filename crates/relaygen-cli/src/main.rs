//! Relaygen CLI — entry point.
//!
//! # Commands
//!
//! - `relaygen generate -m MESSAGE [-s SYSTEM] [--model MODEL]` — single-shot
//! - `relaygen chat [-s SYSTEM] [--model MODEL]` — interactive REPL
//! - `relaygen status [--write-default]` — show configuration and fallback chain

mod helpers;
mod repl;
mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use relaygen_core::config::{load_config, DispatcherConfig};
use relaygen_core::utils::expand_home;
use relaygen_providers::ProviderDispatcher;

/// Model requested when `--model` is not given.
const DEFAULT_MODEL: &str = "gpt-4o";

/// System prompt used when `--system` is not given.
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Relaygen — text generation with provider fallback
#[derive(Parser)]
#[command(name = "relaygen", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.relaygen/config.json)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single completion and print it
    Generate {
        /// User message to send
        #[arg(short, long)]
        message: String,

        /// System prompt
        #[arg(short, long, default_value = DEFAULT_SYSTEM_PROMPT)]
        system: String,

        /// Requested model (overridden when the local or Python path is on)
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Interactive chat; every line is a fresh generation
    Chat {
        /// System prompt
        #[arg(short, long, default_value = DEFAULT_SYSTEM_PROMPT)]
        system: String,

        /// Requested model (overridden when the local or Python path is on)
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and the provider fallback chain
    Status {
        /// Write the default config file if none exists
        #[arg(long, default_value_t = false)]
        write_default: bool,
    },
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(expand_home);

    match cli.command {
        Commands::Generate {
            message,
            system,
            model,
            logs,
        } => {
            init_logging(logs);
            let dispatcher = build_dispatcher(load_config(config_path.as_deref()))?;
            info!(chain = ?dispatcher.chain(), "generating single response");
            let response = dispatcher.generate(&model, &system, &message).await;
            helpers::print_response(&response);
            Ok(())
        }
        Commands::Chat {
            system,
            model,
            logs,
        } => {
            init_logging(logs);
            let dispatcher = build_dispatcher(load_config(config_path.as_deref()))?;
            repl::run(&dispatcher, &system, &model).await
        }
        Commands::Status { write_default } => {
            init_logging(false);
            status::run(config_path, write_default)
        }
    }
}

/// Build the dispatcher from a loaded configuration.
fn build_dispatcher(config: DispatcherConfig) -> Result<ProviderDispatcher> {
    ProviderDispatcher::new(config).context("failed to create provider dispatcher")
}

/// Resolve the config file actually read: `--config` or the default location.
fn resolved_config_path(config_path: Option<PathBuf>) -> PathBuf {
    config_path.unwrap_or_else(relaygen_core::config::get_config_path)
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("relaygen=debug,relaygen_core=debug,relaygen_providers=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let cli = Cli::try_parse_from(["relaygen", "generate", "-m", "Hello"]).unwrap();
        match cli.command {
            Commands::Generate {
                message,
                system,
                model,
                logs,
            } => {
                assert_eq!(message, "Hello");
                assert_eq!(system, DEFAULT_SYSTEM_PROMPT);
                assert_eq!(model, DEFAULT_MODEL);
                assert!(!logs);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["relaygen", "status", "--config", "/tmp/relaygen.json"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("/tmp/relaygen.json"));
    }

    #[test]
    fn generate_requires_message() {
        assert!(Cli::try_parse_from(["relaygen", "generate"]).is_err());
    }

    #[test]
    fn default_config_path_used_without_flag() {
        let path = resolved_config_path(None);
        assert!(path.ends_with(".relaygen/config.json"));

        let explicit = resolved_config_path(Some(PathBuf::from("/etc/relaygen.json")));
        assert_eq!(explicit, PathBuf::from("/etc/relaygen.json"));
    }
}
