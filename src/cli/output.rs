//! Shared CLI output helpers.
//!
//! Results go to stdout as pretty JSON so they can be piped; everything
//! meant for a human goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;
use serde::Serialize;

use crate::error::Result;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a command result as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render(value)?);
    Ok(())
}

/// Render a command result the way [`emit`] prints it.
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Print an error message to stderr (red).
///
/// Example: `✗ missing required value for --resource-group`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set HUBKEYS_SUBSCRIPTION_ID or add it to ~/.hubkeys/context.toml`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
