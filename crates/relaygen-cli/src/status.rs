//! `relaygen status` — show configuration and the provider fallback chain.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use relaygen_core::config::{load_config, save_config, DispatcherConfig, ProviderConfig};
use relaygen_providers::ProviderDispatcher;

use crate::helpers::format_chain;
use crate::DEFAULT_MODEL;

/// Run the status command.
pub fn run(config_path: Option<PathBuf>, write_default: bool) -> Result<()> {
    let path = crate::resolved_config_path(config_path);

    if write_default && !path.exists() {
        save_config(&DispatcherConfig::default(), Some(&path))
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} {}", "Wrote default config to".green(), path.display());
    }

    let config = load_config(Some(&path));
    let dispatcher =
        ProviderDispatcher::new(config.clone()).context("failed to create provider dispatcher")?;

    println!();
    println!("{}", "Relaygen Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        path.display(),
        if path.exists() {
            "✓".green().to_string()
        } else {
            "(not found, env vars only)".dimmed().to_string()
        }
    );
    println!(
        "  {:<18} {}",
        "Fallback chain:".bold(),
        format_chain(&dispatcher.chain())
    );
    println!(
        "  {:<18} {}",
        "Model sent:".bold(),
        model_note(&dispatcher.resolve_model(DEFAULT_MODEL))
    );
    println!(
        "  {:<18} {}",
        "Parameters:".bold(),
        format!(
            "timeout: {}s | placeholder delay: {}ms",
            config.request_timeout_secs, config.placeholder_delay_ms
        )
        .dimmed(),
    );

    println!();
    println!("  {}", "Providers:".bold());
    println!("    {:<20} {}", "Python Backend", flag_status(&config.python));
    println!("    {:<20} {}", "Local LLM", flag_status(&config.local));
    let key_status = if config.has_rapid_key() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· RAPIDAPI_KEY not set".dimmed())
    };
    println!("    {:<20} {}", "RapidAPI", key_status);

    println!();

    Ok(())
}

fn flag_status(provider: &ProviderConfig) -> String {
    if provider.enabled {
        format!("{} {}", "✓".green(), provider.endpoint_url)
    } else {
        format!("{} {}", "· disabled".dimmed(), provider.endpoint_url.dimmed())
    }
}

/// Describe the model the dispatcher will send for the default request.
fn model_note(resolved: &str) -> String {
    if resolved == DEFAULT_MODEL {
        format!("{resolved} (as requested)")
    } else {
        format!("{resolved} (forced by local/Python mode)")
    }
}
