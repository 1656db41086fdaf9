//! Shared CLI helpers — response printing, banner, chain formatting.

use colored::Colorize;

use relaygen_providers::ProviderKind;

/// Print a generated response to stdout.
pub fn print_response(response: &str) {
    println!();
    println!("{}", "Relaygen".cyan().bold());
    if response.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{response}");
    }
    println!();
}

/// Print the banner shown at REPL start.
pub fn print_banner(chain: &[ProviderKind]) {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "Relaygen".cyan().bold(), version.dimmed());
    println!("{} {}", "Providers:".dimmed(), format_chain(chain));
    println!("{}", "Type a message, or \"exit\" to quit.".dimmed());
    println!();
}

/// Print a "thinking" placeholder while a request is in flight.
pub fn print_thinking() {
    eprint!("{}", "⠿ generating...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

/// Render the fallback chain, e.g. `Python Backend → RapidAPI`.
pub fn format_chain(chain: &[ProviderKind]) -> String {
    if chain.is_empty() {
        return "none (configuration help only)".to_string();
    }
    chain
        .iter()
        .map(|k| k.display_name())
        .collect::<Vec<_>>()
        .join(" → ")
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
