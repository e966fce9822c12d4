//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use hippo::Coerced;
use hippo_diagnostics::HippoError;
use std::io::IsTerminal;

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        // errors go to stderr, so that is the stream to probe
        _ => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<HippoError>() {
        Some(err) => err.render(),
        None => format!("{} {:#}", "error:".red().bold(), error),
    }
}

/// Format a coerced value as JSON
pub fn format_json(value: &Coerced, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Print a coerced value to stdout
pub fn print_output(value: &Coerced, pretty: bool) -> Result<()> {
    println!("{}", format_json(value, pretty)?);
    Ok(())
}
