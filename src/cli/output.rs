//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and `--basic`):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

use crate::render::theme::colors_enabled;

const RULE_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 15;

/// Print a success message with checkmark (green).
///
/// Example: `✓ graph written to sops_hierarchy.png`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ SOPS root directory './sops' does not exist`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --root <path> or set SOPS_ACL_ROOT`
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        println!("→ {}", msg);
    }
}

fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold), labels left-aligned.
///
/// Example: `  Users            3`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{:<LABEL_WIDTH$}", label);
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Print a section header with a separator line.
///
/// ```text
/// Summary
/// ────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    header(title);
    rule();
}

/// Print an empty line.
pub fn blank() {
    println!();
}
