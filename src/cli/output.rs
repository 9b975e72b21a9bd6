//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console respects NO_COLOR and non-tty output):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, models, hints
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark (green).
///
/// Example: `✓ added OpenAI`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: talon list`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  - {item}");
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a provider or model name in cyan for inline use.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}
