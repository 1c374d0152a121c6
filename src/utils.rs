//! Supporting helpers shared by the CLI entry point.

use owo_colors::OwoColorize;

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal boundary errors printed to stderr.
pub fn error_prefix() -> String {
    if stderr_colors() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for friendly notes (missing optional config, defaults in use).
pub fn note_prefix() -> String {
    if stderr_colors() {
        "◆ note:".blue().to_string()
    } else {
        "◆ note:".to_string()
    }
}

/// Prefix for informational lines.
pub fn info_prefix() -> String {
    if stderr_colors() {
        "ℹ".cyan().to_string()
    } else {
        "ℹ".to_string()
    }
}
